//! Flat-color raster icons
//!
//! Renders square RGBA icons containing a single inscribed circle and
//! writes them out as PNG files.

pub mod canvas;
pub mod color;
pub mod render;

pub use canvas::{fill_ellipse, new_canvas, BoundingBox, IconSize, IconSizeError};
pub use color::{Color, ColorError};
pub use render::{create_circular_icon, render_circle_icon, write_icon, RenderError};
