//! Immediate-mode 2D rasterizer over a raw RGBA buffer, plus a small
//! retained layer (recorded shapes, clickable buttons) and the drag-to-draw
//! session that feeds it.

pub mod config;
pub mod draw;
pub mod error;
pub mod hit;
pub mod input;
pub mod logging;
pub mod raster;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod surface;
pub mod ticker;
pub mod types;
pub mod widget;

pub use error::Error;
pub use surface::{PixelSurface, Present};
pub use types::{Color, FigureKind, Point, Size};
