use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Asset catalog for a game: named textures, tile sheets, maps and
/// sounds. Loaded from a JSON file by game setup code; the files it
/// points at are decoded by the asset collaborators, never by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: HashMap<String, TextureEntry>,
    #[serde(default)]
    pub sheets: HashMap<String, SheetEntry>,
    #[serde(default)]
    pub maps: HashMap<String, MapEntry>,
    #[serde(default)]
    pub sounds: HashMap<String, SoundEntry>,
}

/// A single image decoded into a color grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureEntry {
    /// Relative path to the image file.
    pub path: String,
}

/// An image sliced into fixed-size tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEntry {
    /// Relative path to the image file.
    pub path: String,
    /// Width of each tile in pixels.
    pub tile_width: u32,
    /// Height of each tile in pixels.
    pub tile_height: u32,
}

/// A tile-index grid in the `.pmap` text format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEntry {
    /// Relative path to the map file.
    pub path: String,
}

/// A playable sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundEntry {
    /// Relative path to the audio file.
    pub path: String,
    /// Spatial falloff distance. Absent for global sounds.
    #[serde(default)]
    pub falloff: Option<f32>,
}

impl AssetManifest {
    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        serde_json::from_str(json)
            .map_err(|e| AssetError::malformed("asset manifest", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_all_sections() {
        let json = r#"{
            "textures": {
                "hero": { "path": "hero.png" }
            },
            "sheets": {
                "terrain": { "path": "terrain.png", "tile_width": 16, "tile_height": 16 }
            },
            "maps": {
                "overworld": { "path": "overworld.pmap" }
            },
            "sounds": {
                "river": { "path": "river.wav", "falloff": 300.0 },
                "theme": { "path": "theme.wav" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();

        assert_eq!(manifest.textures["hero"].path, "hero.png");
        assert_eq!(manifest.sheets["terrain"].tile_width, 16);
        assert_eq!(manifest.maps["overworld"].path, "overworld.pmap");
        assert_eq!(manifest.sounds["river"].falloff, Some(300.0));
        assert_eq!(manifest.sounds["theme"].falloff, None);
    }

    #[test]
    fn sections_default_to_empty() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
        assert!(manifest.sounds.is_empty());
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = AssetManifest::from_json("{ nope").unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
    }
}
