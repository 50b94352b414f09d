use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub overlay: OverlayStyle,
    pub image: Image,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Couldn't read config file: {}", e);
                }
                Err(Error::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }

    /// Like [`Config::load`], but a config file which doesn't exist yields the default config.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match Self::load(path) {
            Err(Error::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// RGBA color, every channel within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// How the display surface should paint the selection box over the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub border_width: f64,
    pub border_color: Color,
    pub fill_color: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            border_width: 2.0,
            border_color: Color::rgba(1.0, 0.0, 0.0, 1.0),
            fill_color: Color::rgba(1.0, 0.0, 0.0, 0.1),
        }
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Image shown when no other image got selected.
    pub default: Option<PathBuf>,
}
