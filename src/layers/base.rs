use crate::tiles::source::SourceDescriptor;
use serde::{Deserialize, Deserializer, Serialize};

/// Rendering strategy of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerType {
    Tile,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "Tile"),
        }
    }
}

/// One entry of the map's layer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub id: String,
    pub title: String,
    pub visible: bool,
    #[serde(deserialize_with = "deserialize_opacity")]
    pub opacity: f32,
    pub source: SourceDescriptor,
}

impl LayerDescriptor {
    /// Creates a visible, fully opaque tile layer.
    pub fn tile(id: impl Into<String>, title: impl Into<String>, source: SourceDescriptor) -> Self {
        Self {
            layer_type: LayerType::Tile,
            id: id.into(),
            title: title.into(),
            visible: true,
            opacity: 1.0,
            source,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn has_valid_opacity(&self) -> bool {
        (0.0..=1.0).contains(&self.opacity)
    }
}

/// Reads opacity at full precision so values just outside `[0, 1]` are not
/// rounded into range when narrowed to `f32`.
fn deserialize_opacity<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let opacity = f64::deserialize(deserializer)?;
    if !(0.0..=1.0).contains(&opacity) {
        return Err(serde::de::Error::custom(format!(
            "opacity {} is outside [0, 1]",
            opacity
        )));
    }
    Ok(opacity as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_json_shape() {
        let layer = LayerDescriptor::tile("osm", "Open Street Map", SourceDescriptor::osm());
        let value = serde_json::to_value(&layer).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "type": "Tile",
                "id": "osm",
                "title": "Open Street Map",
                "visible": true,
                "opacity": 1.0,
                "source": { "type": "OSM" }
            })
        );
    }

    #[test]
    fn test_unknown_layer_type_rejected() {
        let json = r#"{
            "type": "Vector",
            "id": "roads",
            "title": "Roads",
            "visible": true,
            "opacity": 1.0,
            "source": { "type": "OSM" }
        }"#;
        assert!(serde_json::from_str::<LayerDescriptor>(json).is_err());
    }

    fn layer_json(opacity: &str) -> String {
        format!(
            r#"{{
                "type": "Tile",
                "id": "osm",
                "title": "Open Street Map",
                "visible": true,
                "opacity": {},
                "source": {{ "type": "OSM" }}
            }}"#,
            opacity
        )
    }

    #[test]
    fn test_opacity_checked_before_narrowing() {
        for opacity in ["1.00000001", "-1e-9", "1.5", "-0.5"] {
            let err = serde_json::from_str::<LayerDescriptor>(&layer_json(opacity)).unwrap_err();
            assert!(err.to_string().contains("outside [0, 1]"), "{}: {}", opacity, err);
        }

        for (opacity, expected) in [("0", 0.0), ("0.25", 0.25), ("1", 1.0), ("1.0", 1.0)] {
            let layer: LayerDescriptor = serde_json::from_str(&layer_json(opacity)).unwrap();
            assert_eq!(layer.opacity, expected);
        }
    }

    #[test]
    fn test_opacity_bounds() {
        let layer = LayerDescriptor::tile("osm", "Open Street Map", SourceDescriptor::osm());
        assert!(layer.has_valid_opacity());
        assert!(layer.clone().with_opacity(0.0).has_valid_opacity());
        assert!(!layer.clone().with_opacity(1.5).has_valid_opacity());
        assert!(!layer.clone().with_opacity(-0.1).has_valid_opacity());
        assert!(!layer.with_opacity(f32::NAN).has_valid_opacity());
    }
}
