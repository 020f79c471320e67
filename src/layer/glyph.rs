//! Layered-tree glyph layer.

use resvg::tiny_skia::{FillRule, Transform};

use super::{LayerEffect, RenderContext};
use crate::error::Result;
use crate::glyph::{GlyphArea, Polygon, TREE_GLYPH, Tier, layout};
use crate::raster::{polygon_path, solid_paint};
use crate::style::{ColorRgba, IconStyle};

/// Configuration for the glyph fill.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphConfig {
    /// Tiers to draw, in normalized grid units.
    pub tiers: &'static [Tier],
    /// Area the grid is projected into.
    pub area: GlyphArea,
    /// Fill color shared by every tier.
    pub color: ColorRgba,
}

impl GlyphConfig {
    pub fn from_style(style: &IconStyle) -> Self {
        Self {
            tiers: &TREE_GLYPH,
            area: style.glyph_area(),
            color: style.glyph_color,
        }
    }

    /// The tiers mapped to pixel polygons.
    pub fn polygons(&self) -> Vec<Polygon> {
        layout(self.tiers, self.area)
    }
}

impl LayerEffect for GlyphConfig {
    const NAME: &'static str = "glyph";

    fn draw(&self, ctx: &mut RenderContext) -> Result<()> {
        let paint = solid_paint(self.color);
        for polygon in self.polygons() {
            let path = polygon_path(&polygon.points)?;
            ctx.canvas
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_each_tier() {
        let config = GlyphConfig {
            tiers: &TREE_GLYPH,
            area: GlyphArea::new(0, 96),
            color: ColorRgba::new(24, 20, 26, 255),
        };
        let mut ctx = RenderContext::new(96).unwrap();
        config.draw(&mut ctx).unwrap();
        let image = ctx.into_image();

        // At 4 px per grid unit the tiers span rows 8..48, 48..68 and 68..88 on x = 48.
        for y in [28, 52, 72] {
            assert_eq!(image.data.get_pixel(48, y).0, [24, 20, 26, 255], "row {y}");
        }
        assert_eq!(image.data.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn polygons_follow_style_area() {
        let polygons = GlyphConfig::from_style(&IconStyle::default()).polygons();
        assert_eq!(polygons.len(), 3);
        assert_eq!(polygons[0].points[0].x, 512);
    }
}
