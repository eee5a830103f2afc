use crate::core::{constants::OSM_ATTRIBUTION, geo::TileCoord};
use serde::{Deserialize, Serialize};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution text that must be shown alongside the tiles.
    fn attribution(&self) -> &str;
}

/// Tile providers a layer can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "OSM")]
    Osm,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Osm => write!(f, "OSM"),
        }
    }
}

/// Where a layer's tiles come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(rename = "type")]
    pub source_type: SourceType,
}

impl SourceDescriptor {
    pub fn new(source_type: SourceType) -> Self {
        Self { source_type }
    }

    pub fn osm() -> Self {
        Self::new(SourceType::Osm)
    }

    /// Resolves the descriptor to the provider it names.
    pub fn tile_source(&self) -> Box<dyn TileSource> {
        match self.source_type {
            SourceType::Osm => Box::new(OpenStreetMapSource::new()),
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self.source_type {
            SourceType::Osm => OSM_ATTRIBUTION,
        }
    }
}

const OSM_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Simple implementation that hits the default OpenStreetMap tile server.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenStreetMapSource;

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        let idx = ((coord.x as u64 + coord.y as u64) % OSM_SUBDOMAINS.len() as u64) as usize;
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            OSM_SUBDOMAINS[idx], coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        OSM_ATTRIBUTION
    }
}
