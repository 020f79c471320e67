//! Translucent outline drawn over the background edge.

use resvg::tiny_skia::{Stroke, Transform};

use super::{LayerEffect, RenderContext};
use crate::error::Result;
use crate::raster::{RectF, rounded_rect_path, solid_paint};
use crate::style::{ColorRgba, IconStyle};

/// Configuration for the border stroke.
///
/// The stroke follows the background's rounded square and lies entirely
/// inside it: its outer edge coincides with the background edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderConfig {
    /// Distance from each canvas edge to the outer edge of the stroke.
    pub inset: f32,
    /// Corner radius of the outer edge.
    pub radius: f32,
    /// Stroke width. Zero or less draws nothing.
    pub width: f32,
    /// Stroke color.
    pub color: ColorRgba,
}

impl BorderConfig {
    pub fn from_style(style: &IconStyle) -> Self {
        Self {
            inset: style.background_inset as f32,
            radius: style.corner_radius,
            width: style.border_width,
            color: style.border_color,
        }
    }

    /// The centerline of the stroke on a `size` canvas.
    fn centerline(&self, size: u32) -> RectF {
        RectF::inset_square(size, self.inset).shrink(self.width / 2.0)
    }
}

impl LayerEffect for BorderConfig {
    const NAME: &'static str = "border";

    fn draw(&self, ctx: &mut RenderContext) -> Result<()> {
        if self.width <= 0.0 {
            return Ok(());
        }

        let half = self.width / 2.0;
        let path = rounded_rect_path(self.centerline(ctx.size()), (self.radius - half).max(0.0))?;
        let stroke = Stroke {
            width: self.width,
            ..Stroke::default()
        };
        ctx.canvas.stroke_path(
            &path,
            &solid_paint(self.color),
            &stroke,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: f32) -> BorderConfig {
        BorderConfig {
            inset: 10.0,
            radius: 8.0,
            width,
            color: ColorRgba::new(0, 0, 255, 255),
        }
    }

    #[test]
    fn stroke_stays_inside_background_edge() {
        let mut ctx = RenderContext::new(100).unwrap();
        config(4.0).draw(&mut ctx).unwrap();

        let image = ctx.into_image();
        // Top edge spans rows 10..14.
        assert_eq!(image.data.get_pixel(50, 11).0, [0, 0, 255, 255]);
        assert_eq!(image.data.get_pixel(50, 8).0[3], 0);
        assert_eq!(image.data.get_pixel(50, 16).0[3], 0);
        assert_eq!(image.data.get_pixel(50, 50).0[3], 0);
    }

    #[test]
    fn zero_width_draws_nothing() {
        let mut ctx = RenderContext::new(32).unwrap();
        config(0.0).draw(&mut ctx).unwrap();
        assert!(ctx.into_image().data.pixels().all(|p| p.0[3] == 0));
    }
}
