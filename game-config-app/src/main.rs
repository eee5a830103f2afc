use anyhow::Context;
use game_config::{game_config, GameConfig};

/// Prints the built-in configuration, or loads, validates and prints the
/// configuration file given as the only argument.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output = run(std::env::args().skip(1))?;
    println!("{}", output);
    Ok(())
}

/// Renders the configuration selected by `args` as pretty JSON.
fn run<I>(args: I) -> anyhow::Result<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let path = args.next();
    if let Some(extra) = args.next() {
        anyhow::bail!("unexpected argument '{}': expected at most one config path", extra);
    }

    let config = match path {
        Some(path) => GameConfig::from_path(&path)
            .with_context(|| format!("failed to load game config from {}", path))?,
        None => {
            log::debug!("no path given, printing built-in config");
            game_config().clone()
        }
    };

    Ok(config.to_json_string()?)
}
