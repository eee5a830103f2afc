use crate::core::constants::{EARTH_RADIUS, MERCATOR_EXTENT};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Converts to Web Mercator projection (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + self.lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Creates LatLng from Web Mercator coordinates
    pub fn from_mercator(point: Point) -> Self {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in projected (Web Mercator) coordinates.
///
/// Serialized as a two element array `[x, y]`, the shape map libraries
/// expect for a view center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks that both components lie inside the Web Mercator world square
    pub fn is_within_mercator_extent(&self) -> bool {
        self.is_finite()
            && self.x.abs() <= MERCATOR_EXTENT
            && self.y.abs() <= MERCATOR_EXTENT
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Checks if the tile is valid for the given zoom level
    pub fn is_valid(&self) -> bool {
        match 1_u32.checked_shl(self.z as u32) {
            Some(max_coord) => self.x < max_coord && self.y < max_coord,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
    }

    #[test]
    fn test_mercator_projection() {
        let origin = LatLng::new(0.0, 0.0).to_mercator();
        assert!(origin.x.abs() < 1e-6);
        assert!(origin.y.abs() < 1e-6);

        let edge = LatLng::new(0.0, 180.0).to_mercator();
        assert!((edge.x - MERCATOR_EXTENT).abs() < 1e-3);

        let paris = LatLng::new(48.8566, 2.3522);
        let back = LatLng::from_mercator(paris.to_mercator());
        assert!((back.lat - paris.lat).abs() < 1e-9);
        assert!((back.lng - paris.lng).abs() < 1e-9);
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let point = Point::new(1_000_000.0, 6_000_000.0);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, "[1000000.0,6000000.0]");

        let parsed: Point = serde_json::from_str("[1000000, 6000000]").unwrap();
        assert_eq!(parsed, point);

        assert!(serde_json::from_str::<Point>("[1.0]").is_err());
        assert!(serde_json::from_str::<Point>("{\"x\": 1.0, \"y\": 2.0}").is_err());
    }

    #[test]
    fn test_point_extent() {
        assert!(Point::new(1_000_000.0, 6_000_000.0).is_within_mercator_extent());
        assert!(Point::new(-MERCATOR_EXTENT, MERCATOR_EXTENT).is_within_mercator_extent());
        assert!(!Point::new(MERCATOR_EXTENT + 1.0, 0.0).is_within_mercator_extent());
        assert!(!Point::new(f64::NAN, 0.0).is_within_mercator_extent());
    }

    #[test]
    fn test_tile_coord_validity() {
        assert!(TileCoord::new(0, 0, 0).is_valid());
        assert!(!TileCoord::new(1, 0, 0).is_valid());
        assert!(TileCoord::new(7, 7, 3).is_valid());
        assert!(!TileCoord::new(8, 7, 3).is_valid());
        assert!(!TileCoord::new(0, 0, 40).is_valid());
    }
}
