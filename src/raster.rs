//! Raster primitives on top of tiny-skia.
//!
//! This module builds the paths the layers draw (rounded rectangles and
//! polygons) and converts the finished pixmap into an [`RgbaImage`].

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Paint, Path, PathBuilder, Pixmap};

use crate::error::{IconError, Result};
use crate::glyph::PointPx;
use crate::style::ColorRgba;

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Canvas
// ============================================================================

/// Allocates a fully transparent square pixmap.
pub fn new_canvas(size: u32) -> Result<Pixmap> {
    Pixmap::new(size, size).ok_or(IconError::CanvasAllocation {
        width: size,
        height: size,
    })
}

/// Creates an anti-aliased solid paint.
pub fn solid_paint(color: ColorRgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

// ============================================================================
// Paths
// ============================================================================

/// An axis-aligned rectangle in floating point pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A square inset by `inset` from each edge of a `size` x `size` canvas.
    pub fn inset_square(size: u32, inset: f32) -> Self {
        let size = size as f32;
        Self::new(inset, inset, size - inset, size - inset)
    }

    /// Shrinks the rectangle by `amount` on every side.
    pub fn shrink(&self, amount: f32) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Builds a closed rounded-rectangle path.
///
/// The radius is clamped to half the shorter side, so a large radius yields a
/// pill or circle rather than overlapping arcs.
pub fn rounded_rect_path(rect: RectF, radius: f32) -> Result<Path> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Err(IconError::Geometry("rounded rectangle has no area"));
    }

    let r = radius.max(0.0).min(rect.width() / 2.0).min(rect.height() / 2.0);
    let k = r * KAPPA;
    let RectF { left, top, right, bottom } = rect;

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();

    pb.finish()
        .ok_or(IconError::Geometry("rounded rectangle path is empty"))
}

/// Builds a closed polygon path through the given pixel points.
pub fn polygon_path(points: &[PointPx]) -> Result<Path> {
    let Some((first, rest)) = points.split_first() else {
        return Err(IconError::Geometry("polygon has no points"));
    };

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();

    pb.finish().ok_or(IconError::Geometry("polygon is degenerate"))
}

// ============================================================================
// Conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, pixel) in pixmap.pixels().iter().enumerate() {
        let x = i as u32 % width;
        let y = i as u32 / width;
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
