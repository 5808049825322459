// Save the current frame to disk.
// Visual: the PNG looks exactly like the window did at the moment of saving.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::Error;
use crate::surface::PixelSurface;

pub fn save_png(surface: &PixelSurface, path: &Path) -> Result<(), Error> {
    let (w, h) = (surface.width() as u32, surface.height() as u32);
    let img = RgbaImage::from_raw(w, h, surface.as_bytes().to_vec())
        .ok_or_else(|| Error::Snapshot(format!("buffer does not match {w}x{h}")))?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Snapshot(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "snapshot saved");
    Ok(())
}
