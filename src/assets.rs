use macroquad::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug)]
pub enum AssetError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[derive(Deserialize)]
struct ManifestFile {
    sheets: HashMap<String, String>,
}

/// Sprite sheets keyed by animation-state name ("player.idle", "boar.walk",
/// "background", ...). A sheet that failed to load is simply absent; draw
/// code treats a missing sheet as a skipped draw, never an error.
pub struct SpriteLibrary {
    sheets: HashMap<String, Texture2D>,
}

impl SpriteLibrary {
    pub fn empty() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    /// Reads the manifest and loads every sheet it names. Individual sheet
    /// failures are reported and skipped so one missing PNG does not take
    /// the whole game down.
    pub async fn load_from(manifest_path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let manifest_path = manifest_path.as_ref();
        let raw = std::fs::read_to_string(manifest_path)?;
        let manifest: ManifestFile = serde_json::from_str(&raw)?;

        let base = manifest_path.parent().unwrap_or(Path::new(""));
        let mut sheets = HashMap::new();
        for (key, rel) in manifest.sheets {
            let path = base.join(&rel);
            match load_texture(&path.to_string_lossy()).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    sheets.insert(key, tex);
                }
                Err(err) => {
                    eprintln!("sprite sheet '{key}' load failed ({}): {err}", path.display());
                }
            }
        }

        Ok(Self { sheets })
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.sheets.get(key)
    }
}
