// One error type for the whole crate.
// Every variant states *where* things went wrong. The rasterizer itself never
// fails; these only come from the host boundary and the command surface.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the buffer to the window failed

    #[error("Config error in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Snapshot error: {0}")]
    Snapshot(String), // Encoding/writing the PNG failed

    #[error("Unknown color name: {0:?}")]
    UnknownColor(String),

    #[error("Surface must be at least 1x1, got {width}x{height}")]
    SurfaceSize { width: usize, height: usize },
}
