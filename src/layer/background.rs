//! Rounded-square background layer.

use resvg::tiny_skia::{FillRule, Transform};

use super::{LayerEffect, RenderContext};
use crate::error::Result;
use crate::raster::{RectF, rounded_rect_path, solid_paint};
use crate::style::{ColorRgba, IconStyle};

/// Configuration for the filled background.
///
/// The background is a rounded square inset from every canvas edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    /// Distance from each canvas edge.
    pub inset: f32,
    /// Corner radius.
    pub radius: f32,
    /// Fill color.
    pub color: ColorRgba,
}

impl BackgroundConfig {
    pub fn from_style(style: &IconStyle) -> Self {
        Self {
            inset: style.background_inset as f32,
            radius: style.corner_radius,
            color: style.accent,
        }
    }

    /// The rectangle covered by the background on a `size` canvas.
    pub fn rect(&self, size: u32) -> RectF {
        RectF::inset_square(size, self.inset)
    }
}

impl LayerEffect for BackgroundConfig {
    const NAME: &'static str = "background";

    fn draw(&self, ctx: &mut RenderContext) -> Result<()> {
        let path = rounded_rect_path(self.rect(ctx.size()), self.radius)?;
        ctx.canvas.fill_path(
            &path,
            &solid_paint(self.color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}
