//! Initial map view configuration of the game
//!
//! This module holds the built-in configuration document (initial zoom, view
//! center and tile layer stack) together with loading, serialization and
//! validation helpers for configuration documents read from disk.

use crate::{
    core::{
        constants::{
            DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, OSM_LAYER_ID, OSM_LAYER_TITLE,
        },
        geo::{LatLng, Point},
    },
    layers::base::LayerDescriptor,
    tiles::source::SourceDescriptor,
    ConfigError, Result,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// The built-in configuration, created on first access and never mutated.
pub static GAME_CONFIG: Lazy<GameConfig> = Lazy::new(GameConfig::builtin);

/// Returns the built-in configuration.
pub fn game_config() -> &'static GameConfig {
    &GAME_CONFIG
}

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub map: MapConfig,
}

/// Initial view of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub zoom: f64,
    /// View center in Web Mercator meters
    pub center: Point,
    /// Layer stack, bottom-most first
    pub layers: Vec<LayerDescriptor>,
}

impl GameConfig {
    fn builtin() -> Self {
        Self {
            map: MapConfig {
                zoom: DEFAULT_ZOOM,
                center: Point::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                layers: vec![LayerDescriptor::tile(
                    OSM_LAYER_ID,
                    OSM_LAYER_TITLE,
                    SourceDescriptor::osm(),
                )],
            },
        }
    }

    /// Parses a JSON document. The result is not validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading game config from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        config.validate()?;

        log::debug!(
            "loaded game config: zoom {}, {} layer(s)",
            config.map.zoom,
            config.map.layers.len()
        );
        Ok(config)
    }

    /// Validates the map section.
    pub fn validate(&self) -> Result<()> {
        self.map.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        game_config().clone()
    }
}

impl MapConfig {
    /// Checks zoom, center and layers, returning the first failure.
    pub fn validate(&self) -> Result<()> {
        if !self.zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }

        if !self.center.is_within_mercator_extent() {
            return Err(ConfigError::InvalidCoordinates(format!(
                "center [{}, {}] is outside the Web Mercator extent",
                self.center.x, self.center.y
            )));
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if layer.id.is_empty() {
                return Err(ConfigError::EmptyLayerId { index });
            }
            if !layer.has_valid_opacity() {
                return Err(ConfigError::InvalidOpacity {
                    id: layer.id.clone(),
                    opacity: layer.opacity,
                });
            }
        }

        let mut seen = HashSet::new();
        for layer in &self.layers {
            if !seen.insert(layer.id.as_str()) {
                return Err(ConfigError::DuplicateLayerId(layer.id.clone()));
            }
        }

        log::debug!("map config valid ({} layer(s))", self.layers.len());
        Ok(())
    }

    /// Gets a layer by id
    pub fn layer(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Visible layers in draw order.
    pub fn visible_layers(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.iter().filter(|layer| layer.visible)
    }

    /// The view center as geographic coordinates.
    pub fn center_lat_lng(&self) -> LatLng {
        LatLng::from_mercator(self.center)
    }
}
