// Startup settings. Every field has a default so a partial JSON file works.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::Error;
use crate::types::Color;

/// Looked up in the working directory when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "pixel-sketch.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub title: String,
    /// Drag preview period in milliseconds.
    pub tick_ms: u64,
    /// Idle redraw rate (widgets); also caps the window's update rate.
    pub target_fps: u64,
    pub background: Color,
    pub snapshot_path: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Pixel Sketch".to_string(),
            tick_ms: 100,
            target_fps: 100,
            background: Color::white(),
            snapshot_path: PathBuf::from("sketch.png"),
            debug: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    /// First argument is an explicit config path; otherwise use the default
    /// file if present, else built-in defaults.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, Error> {
        match args.next() {
            Some(path) => Self::load(Path::new(&path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn parse(text: &str, origin: &Path) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(text).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;
        if config.width == 0 || config.height == 0 {
            return Err(Error::SurfaceSize { width: config.width, height: config.height });
        }
        info!(path = %origin.display(), "config loaded");
        Ok(config)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn redraw_period(&self) -> Duration {
        Duration::from_millis(1000 / self.target_fps.max(1))
    }
}
