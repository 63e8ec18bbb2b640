use crate::canvas::{fill_ellipse, new_canvas, BoundingBox, IconSize};
use crate::color::Color;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write PNG {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Render a transparent square with a `color` circle inscribed in it.
pub fn render_circle_icon(size: IconSize, color: Color) -> RgbaImage {
    let mut image = new_canvas(size);
    fill_ellipse(&mut image, BoundingBox::full(size), color);
    image
}

/// Save `image` as PNG at `path`, creating the parent directory if needed.
/// An existing file is overwritten.
pub fn write_icon(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Explicit format so the extension never decides the encoding.
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Wrote {}x{} icon to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Render a circular icon and write it to `path`.
pub fn create_circular_icon(size: IconSize, color: Color, path: &Path) -> Result<(), RenderError> {
    let image = render_circle_icon(size, color);
    write_icon(&image, path)
}
