//! Core constants for the initial map view and Web Mercator conventions.
//! Keeping them in a single place makes it easier to tweak the starting view.

/// Initial zoom level of the game map.
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Initial map center in Web Mercator meters (x, y).
pub const DEFAULT_CENTER: (f64, f64) = (1_000_000.0, 6_000_000.0);

/// Lowest zoom level accepted by validation.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom level accepted by validation.
pub const MAX_ZOOM: f64 = 28.0;

/// Equatorial radius used by EPSG:3857.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the width of the Web Mercator world square, in meters (π · R).
pub const MERCATOR_EXTENT: f64 = 20_037_508.342_789_244;

/// Id of the base OpenStreetMap layer.
pub const OSM_LAYER_ID: &str = "osm";

/// Display title of the base OpenStreetMap layer.
pub const OSM_LAYER_TITLE: &str = "Open Street Map";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";
