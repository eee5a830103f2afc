//! # game-config
//!
//! Initial map view configuration for the game.
//!
//! The crate exposes one immutable configuration document describing the
//! starting zoom, the view center (in Web Mercator meters) and the ordered
//! stack of tile layers the map renderer should draw. Documents with the same
//! shape can also be loaded from JSON and validated.

pub mod core;
pub mod layers;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{game_config, GameConfig, MapConfig, GAME_CONFIG},
    geo::{LatLng, Point, TileCoord},
};

pub use crate::layers::base::{LayerDescriptor, LayerType};

pub use crate::tiles::source::{OpenStreetMapSource, SourceDescriptor, SourceType, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid zoom level: {0}")]
    InvalidZoom(f64),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid opacity {opacity} for layer '{id}'")]
    InvalidOpacity { id: String, opacity: f32 },

    #[error("Layer at index {index} has an empty id")]
    EmptyLayerId { index: usize },

    #[error("Duplicate layer id: {0}")]
    DuplicateLayerId(String),
}

/// Error type alias for convenience
pub type Error = ConfigError;
