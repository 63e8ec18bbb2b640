use crate::color::Color;
use image::RgbaImage;
use std::fmt;
use std::num::NonZeroU32;

/// Edge length of a square icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(NonZeroU32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("icon size must be at least one pixel")]
pub struct IconSizeError;

impl IconSize {
    pub fn new(pixels: u32) -> Result<Self, IconSizeError> {
        NonZeroU32::new(pixels).map(Self).ok_or(IconSizeError)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for IconSize {
    type Error = IconSizeError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        Self::new(pixels)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive pixel rectangle: both `(x0, y0)` and `(x1, y1)` are covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Returns `None` when a corner is not at or past its opposite.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Option<Self> {
        (x0 <= x1 && y0 <= y1).then_some(Self { x0, y0, x1, y1 })
    }

    /// The box covering a whole `size` x `size` canvas, `(0, 0)` to `(size-1, size-1)`.
    pub fn full(size: IconSize) -> Self {
        let last = size.get() - 1;
        Self {
            x0: 0,
            y0: 0,
            x1: last,
            y1: last,
        }
    }

    /// Horizontal extent in pixels. `u64` so a box spanning every `u32`
    /// column still fits.
    pub fn width(&self) -> u64 {
        u64::from(self.x1 - self.x0) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.y1 - self.y0) + 1
    }
}

/// A fully transparent square canvas.
pub fn new_canvas(size: IconSize) -> RgbaImage {
    RgbaImage::from_pixel(size.get(), size.get(), Color::TRANSPARENT.to_rgba())
}

/// Fill the ellipse inscribed in `bounds` with a flat color.
///
/// A pixel is painted when its center lies inside or on the ellipse. Since the
/// box is inclusive the ellipse spans `width()` pixels across, so a full-canvas
/// box touches all four edges. The inside check uses doubled integer coordinates,
/// which keeps the result exact and mirror-symmetric. Pixels outside the image
/// are clipped and painted pixels are replaced, not blended. Only the part of
/// the box that overlaps the image is visited, so boxes of any size are cheap.
pub fn fill_ellipse(image: &mut RgbaImage, bounds: BoundingBox, color: Color) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let pixel = color.to_rgba();

    let w = bounds.width();
    let h = bounds.height();
    // Twice the ellipse center.
    let cx2 = u64::from(bounds.x0) + u64::from(bounds.x1) + 1;
    let cy2 = u64::from(bounds.y0) + u64::from(bounds.y1) + 1;

    let y_end = bounds.y1.min(image.height() - 1);
    let x_end = bounds.x1.min(image.width() - 1);

    for y in bounds.y0..=y_end {
        let dy = (2 * u64::from(y) + 1).abs_diff(cy2);
        for x in bounds.x0..=x_end {
            let dx = (2 * u64::from(x) + 1).abs_diff(cx2);
            if inside_ellipse(dx, dy, w, h) {
                image.put_pixel(x, y, pixel);
            }
        }
    }
}

/// `(dx / w)^2 + (dy / h)^2 <= 1` for offsets taken inside the box, so
/// `dx < w` and `dy < h`.
///
/// Exact in `u128` unless both axes are close to the full `u32` range, where
/// the products no longer fit and the check falls back to `f64`.
fn inside_ellipse(dx: u64, dy: u64, w: u64, h: u64) -> bool {
    let (dx, dy, w, h) = (dx as u128, dy as u128, w as u128, h as u128);

    let lhs = (dx * dx * h)
        .checked_mul(h)
        .zip((dy * dy * w).checked_mul(w))
        .and_then(|(x, y)| x.checked_add(y));
    let rhs = (w * w * h).checked_mul(h);

    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs <= rhs,
        _ => {
            let nx = dx as f64 / w as f64;
            let ny = dy as f64 / h as f64;
            nx * nx + ny * ny <= 1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(pixels: u32) -> IconSize {
        IconSize::new(pixels).unwrap()
    }

    #[test]
    fn test_icon_size_rejects_zero() {
        assert_eq!(IconSize::new(0), Err(IconSizeError));
        assert_eq!(IconSize::try_from(32).unwrap().get(), 32);
        assert_eq!(size(512).to_string(), "512");
    }

    #[test]
    fn test_bounding_box() {
        let full = BoundingBox::full(size(32));
        assert_eq!(full, BoundingBox::new(0, 0, 31, 31).unwrap());
        assert_eq!(full.width(), 32);
        assert_eq!(full.height(), 32);
        assert!(BoundingBox::new(5, 0, 4, 10).is_none());
        assert_eq!(BoundingBox::new(3, 3, 3, 3).unwrap().width(), 1);
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = new_canvas(size(8));
        assert_eq!(canvas.dimensions(), (8, 8));
        assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_ellipse_touches_every_edge() {
        let mut canvas = new_canvas(size(32));
        fill_ellipse(&mut canvas, BoundingBox::full(size(32)), Color::DEFAULT_FILL);

        let opaque = |x: u32, y: u32| canvas.get_pixel(x, y)[3] == 255;
        // Middle rows and columns reach the border.
        assert!(opaque(0, 15) && opaque(0, 16));
        assert!(opaque(31, 15) && opaque(31, 16));
        assert!(opaque(15, 0) && opaque(16, 0));
        assert!(opaque(15, 31) && opaque(16, 31));
        // Corners stay clear.
        assert!(!opaque(0, 0));
        assert!(!opaque(31, 0));
        assert!(!opaque(0, 31));
        assert!(!opaque(31, 31));
    }

    #[test]
    fn test_fill_ellipse_is_symmetric() {
        for n in [5, 32, 33, 64] {
            let mut canvas = new_canvas(size(n));
            fill_ellipse(&mut canvas, BoundingBox::full(size(n)), Color::rgb(1, 2, 3));
            for y in 0..n {
                for x in 0..n {
                    let here = canvas.get_pixel(x, y);
                    assert_eq!(here, canvas.get_pixel(n - 1 - x, y), "size {n} at ({x}, {y})");
                    assert_eq!(here, canvas.get_pixel(x, n - 1 - y), "size {n} at ({x}, {y})");
                    assert_eq!(here, canvas.get_pixel(y, x), "size {n} at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_fill_ellipse_single_pixel() {
        let mut canvas = new_canvas(size(1));
        fill_ellipse(&mut canvas, BoundingBox::full(size(1)), Color::rgb(9, 9, 9));
        assert_eq!(canvas.get_pixel(0, 0).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_fill_ellipse_non_square_box() {
        let mut canvas = new_canvas(size(20));
        let bounds = BoundingBox::new(2, 8, 17, 11).unwrap();
        fill_ellipse(&mut canvas, bounds, Color::rgb(0, 0, 0));

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel[3] != 0 {
                assert!((2..=17).contains(&x) && (8..=11).contains(&y), "({x}, {y}) outside box");
            }
        }
        assert_eq!(canvas.get_pixel(2, 9)[3], 255);
        assert_eq!(canvas.get_pixel(17, 10)[3], 255);
        assert_eq!(canvas.get_pixel(2, 8)[3], 0);
    }

    #[test]
    fn test_fill_ellipse_clips_to_canvas() {
        let mut canvas = new_canvas(size(10));
        let bounds = BoundingBox::new(5, 5, 24, 24).unwrap();
        fill_ellipse(&mut canvas, bounds, Color::rgb(255, 0, 0));
        assert_eq!(canvas.dimensions(), (10, 10));
        assert_eq!(canvas.get_pixel(9, 9)[3], 255);
        assert_eq!(canvas.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn test_fill_ellipse_huge_box_on_small_canvas() {
        let mut canvas = new_canvas(size(10));
        let bounds = BoundingBox::new(0, 0, 100_000, 100_000).unwrap();
        fill_ellipse(&mut canvas, bounds, Color::rgb(255, 0, 0));
        // The canvas sits in the transparent corner of the box.
        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_fill_ellipse_very_wide_box() {
        // Odd height puts one row exactly on the center line, which must still
        // reach the left edge of the box.
        let mut canvas = new_canvas(size(10));
        let bounds = BoundingBox::new(0, 0, 4_000_000_000, 8).unwrap();
        fill_ellipse(&mut canvas, bounds, Color::rgb(0, 0, 255));
        assert_eq!(canvas.get_pixel(0, 4).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(9, 4)[3], 255);
        assert_eq!(canvas.get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.get_pixel(0, 9)[3], 0);
    }

    #[test]
    fn test_fill_ellipse_full_u32_box() {
        let bounds = BoundingBox::new(0, 0, u32::MAX, u32::MAX).unwrap();
        assert_eq!(bounds.width(), 1 << 32);

        let mut canvas = new_canvas(size(10));
        fill_ellipse(&mut canvas, bounds, Color::rgb(0, 255, 0));
        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_inside_ellipse_at_the_limits() {
        let max = 1u64 << 32;
        assert!(inside_ellipse(0, 0, max, max));
        assert!(inside_ellipse(max - 1, 0, max, max));
        assert!(!inside_ellipse(max - 1, max - 1, max, max));
    }

    #[test]
    fn test_fill_ellipse_overwrites_instead_of_blending() {
        let mut canvas = new_canvas(size(4));
        fill_ellipse(&mut canvas, BoundingBox::full(size(4)), Color::rgb(255, 255, 255));
        fill_ellipse(&mut canvas, BoundingBox::full(size(4)), Color::rgba(10, 20, 30, 40));
        assert_eq!(canvas.get_pixel(2, 2).0, [10, 20, 30, 40]);
    }
}
