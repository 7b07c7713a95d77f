use crate::error::LightboxError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_CONTAINER_ID: &str = "modal";
pub const DEFAULT_CONTENT_ID: &str = "modal-content";

/// Id of the inline `<script type="application/json">` holding page config.
pub const CONFIG_SCRIPT_ID: &str = "lightbox-config";

/// Ids of the host-document elements the overlay drives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LightboxConfig {
    pub container_id: String,
    pub content_id: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            content_id: DEFAULT_CONTENT_ID.to_string(),
        }
    }
}

impl LightboxConfig {
    /// `undefined`/`null` mean defaults.
    pub fn from_js(value: JsValue) -> Result<Self, LightboxError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StreamTile {
    pub src: String,
    #[serde(default)]
    pub label: String,
}

impl StreamTile {
    pub fn new(src: &str, label: &str) -> Self {
        Self {
            src: src.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GalleryConfig {
    pub title: String,
    pub streams: Vec<StreamTile>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Cameras".to_string(),
            streams: vec![
                StreamTile::new("/stream1.mjpg", "Camera 1"),
                StreamTile::new("/stream2.mjpg", "Camera 2"),
                StreamTile::new("/stream3.mjpg", "Camera 3"),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
    pub lightbox: LightboxConfig,
    pub gallery: GalleryConfig,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, LightboxError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the inline config script, falling back to defaults when it is
    /// absent or unparsable.
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content())
        else {
            log::debug!("no #{} script, using default config", CONFIG_SCRIPT_ID);
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_markup_ids() {
        let config = LightboxConfig::default();
        assert_eq!(config.container_id, "modal");
        assert_eq!(config.content_id, "modal-content");
    }

    #[test]
    fn default_gallery_lists_three_streams() {
        let gallery = GalleryConfig::default();
        let srcs: Vec<&str> = gallery.streams.iter().map(|s| s.src.as_str()).collect();
        assert_eq!(srcs, ["/stream1.mjpg", "/stream2.mjpg", "/stream3.mjpg"]);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_lightbox_section_keeps_other_default() {
        let json = r#"{"lightbox": {"container_id": "overlay"}}"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.lightbox.container_id, "overlay");
        assert_eq!(config.lightbox.content_id, "modal-content");
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn gallery_streams_override_defaults() {
        let json = r#"{
            "gallery": {
                "title": "Yard",
                "streams": [{"src": "/yard.mjpg", "label": "Yard"}, {"src": "/gate.mjpg"}]
            }
        }"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.gallery.title, "Yard");
        assert_eq!(config.gallery.streams.len(), 2);
        assert_eq!(config.gallery.streams[1], StreamTile::new("/gate.mjpg", ""));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"theme": "dark", "lightbox": {"zoom": 2}}"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageConfig::from_json("{lightbox:").unwrap_err();
        assert!(matches!(err, LightboxError::Config(_)));
    }

    #[test]
    fn tile_without_src_is_rejected() {
        let json = r#"{"gallery": {"streams": [{"label": "x"}]}}"#;
        let err = PageConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("src"));
    }
}
