use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sdlpp::{Colour, Rect, Size};

/// A filled rectangle drawn every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub rect: Rect,
    pub colour: Colour,
    /// Outline only
    #[serde(default)]
    pub outline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub title: String,
    pub size: Size,
    /// Video driver to force, e.g. "dummy" for headless runs
    pub driver: Option<String>,
    pub vsync: bool,
    pub background: Colour,
    pub shapes: Vec<Shape>,
    /// Degrees per frame the sprite turns
    pub spin: f64,
    /// Stop after this many frames; run until quit when absent
    pub frames: Option<u32>,
    /// Write the last frame to this BMP file
    pub screenshot: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "sdlpp demo".to_string(),
            size: Size::new(640, 480),
            driver: None,
            vsync: true,
            background: Colour::rgb(0x20, 0x20, 0x28),
            shapes: vec![
                Shape { rect: Rect::new(40, 40, 160, 100), colour: Colour::rgb(0xE0, 0x40, 0x40), outline: false },
                Shape { rect: Rect::new(260, 60, 120, 120), colour: Colour::rgb(0x40, 0xC0, 0x60), outline: true },
            ],
            spin: 2.0,
            frames: None,
            screenshot: None,
        }
    }
}

/// Default location: `<config dir>/sdlpp-demo/config.json`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sdlpp-demo").join("config.json"))
}

pub fn parse(text: &str) -> Result<DemoConfig, String> {
    serde_json::from_str(text).map_err(|e| format!("Invalid config: {}", e))
}

/// Load the config from an explicit path, the default path, or defaults
///
/// An explicit path must exist; a missing default file is not an error.
pub fn load(explicit: Option<&Path>) -> Result<DemoConfig, String> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        log::info!("Loaded config from {}", path.display());
        return parse(&text);
    }

    match default_path() {
        Some(path) if path.exists() => {
            let text = fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            log::info!("Loaded config from {}", path.display());
            parse(&text)
        }
        _ => {
            log::info!("No config file, using defaults");
            Ok(DemoConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse(r#"{ "title": "x", "frames": 3, "background": { "r": 1, "g": 2, "b": 3 } }"#).unwrap();
        assert_eq!(config.title, "x");
        assert_eq!(config.frames, Some(3));
        assert_eq!(config.background, Colour::rgb(1, 2, 3));
        assert_eq!(config.size, DemoConfig::default().size);
    }

    #[test]
    fn test_shapes_parse() {
        let config = parse(
            r#"{ "shapes": [ { "rect": { "x": 1, "y": 2, "w": 3, "h": 4 }, "colour": { "r": 9, "g": 9, "b": 9, "a": 0 } } ] }"#,
        )
        .unwrap();
        assert_eq!(config.shapes.len(), 1);
        assert_eq!(config.shapes[0].rect, Rect::new(1, 2, 3, 4));
        assert_eq!(config.shapes[0].colour.a, 0);
        assert!(!config.shapes[0].outline);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join(format!("sdlpp-demo-missing-{}.json", std::process::id()));
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(parse("{ not json").is_err());
    }
}
