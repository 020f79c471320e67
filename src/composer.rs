//! Icon composition engine.

use tracing::debug;

use crate::error::Result;
use crate::glyph::Polygon;
use crate::icon::IconImage;
use crate::layer::{BackgroundConfig, BorderConfig, GlyphConfig, LayerPipeline};
use crate::style::IconStyle;

// ============================================================================
// IconComposer
// ============================================================================

/// Draws the app icon.
///
/// `IconComposer` holds an [`IconStyle`] and the [`LayerPipeline`] built from
/// it. Layers can be toggled through the [`pipeline`](Self::pipeline) field.
///
/// # Layer Pipeline
///
/// 1. **Background** (`pipeline.background`) - Rounded square in the accent color
/// 2. **Border** (`pipeline.border`) - Translucent outline of the same square
/// 3. **Glyph** (`pipeline.glyph`) - The three-tier tree symbol
///
/// # Example
///
/// ```
/// use treeglyph_icons::{IconComposer, IconStyle};
///
/// let mut composer = IconComposer::new(IconStyle::default().scaled_to(128));
/// composer.pipeline.border.set_enabled(false);
///
/// let icon = composer.compose().unwrap();
/// assert_eq!(icon.dimensions().width, 128);
/// ```
#[derive(Debug, Clone)]
pub struct IconComposer {
    style: IconStyle,

    /// The layer pipeline. Access layers directly to toggle them.
    pub pipeline: LayerPipeline,
}

impl Default for IconComposer {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl IconComposer {
    /// Creates a composer for the given style.
    pub fn new(style: IconStyle) -> Self {
        let pipeline = LayerPipeline::from_style(&style);
        Self { style, pipeline }
    }

    /// Returns the current style.
    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Replaces the style, reconfiguring every layer.
    ///
    /// Enabled flags are preserved.
    pub fn apply_style(&mut self, style: IconStyle) {
        self.pipeline
            .background
            .set_config(Some(BackgroundConfig::from_style(&style)));
        self.pipeline
            .border
            .set_config(Some(BorderConfig::from_style(&style)));
        self.pipeline
            .glyph
            .set_config(Some(GlyphConfig::from_style(&style)));
        self.style = style;
    }

    /// The glyph polygons in canvas pixels, as they will be drawn.
    pub fn glyph_polygons(&self) -> Vec<Polygon> {
        self.pipeline
            .glyph
            .config()
            .map(GlyphConfig::polygons)
            .unwrap_or_default()
    }

    /// Draws the icon onto a fresh transparent canvas.
    ///
    /// The result is fully determined by the style and layer flags.
    pub fn compose(&self) -> Result<IconImage> {
        debug!(size = self.style.canvas_size, "composing icon");
        self.pipeline.render(self.style.canvas_size)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DEFAULT_ACCENT, DEFAULT_GLYPH};

    #[test]
    fn reference_icon_pixels() {
        let icon = IconComposer::default().compose().unwrap();
        let img = &icon.data;

        assert_eq!(img.dimensions(), (1024, 1024));
        assert_eq!(icon.scale, 1.0);

        // Outside the rounded corner.
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(60, 60).0[3], 0);
        // Background between the border and the glyph.
        let accent = DEFAULT_ACCENT;
        assert_eq!(img.get_pixel(120, 512).0, [accent.r, accent.g, accent.b, accent.a]);
        // Inside the crown rhombus.
        let glyph = DEFAULT_GLYPH;
        assert_eq!(img.get_pixel(512, 400).0, [glyph.r, glyph.g, glyph.b, glyph.a]);
    }

    #[test]
    fn border_blends_over_background() {
        let icon = IconComposer::default().compose().unwrap();
        let [r, g, b, a] = icon.data.get_pixel(512, 51).0;

        assert_eq!(a, 255);
        assert!(r > DEFAULT_ACCENT.r && g > DEFAULT_ACCENT.g && b > DEFAULT_ACCENT.b);
    }

    #[test]
    fn compose_is_deterministic() {
        let composer = IconComposer::default();
        let first = composer.compose().unwrap();
        let second = composer.compose().unwrap();
        assert!(first.data.as_raw() == second.data.as_raw());
    }

    #[test]
    fn glyph_tiers_stack_without_overlap() {
        let polygons = IconComposer::default().glyph_polygons();
        let ranges: Vec<_> = polygons.iter().filter_map(Polygon::y_range).collect();

        assert_eq!(ranges.len(), 3);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0, "tiers should share one boundary row");
        }
    }

    #[test]
    fn inset_larger_than_canvas_is_a_geometry_error() {
        let style = IconStyle {
            canvas_size: 64,
            ..IconStyle::default()
        };
        let err = IconComposer::new(style).compose().unwrap_err();
        assert!(matches!(err, crate::error::IconError::Geometry(_)));
    }

    #[test]
    fn apply_style_preserves_enabled_flags() {
        let mut composer = IconComposer::default();
        composer.pipeline.glyph.set_enabled(false);

        composer.apply_style(IconStyle::default().scaled_to(64));

        assert_eq!(composer.style().canvas_size, 64);
        assert!(!composer.pipeline.glyph.is_enabled());
        assert!(composer.pipeline.glyph.config().is_some());

        let accent = DEFAULT_ACCENT;
        let icon = composer.compose().unwrap();
        assert_eq!(icon.data.get_pixel(32, 25).0, [accent.r, accent.g, accent.b, accent.a]);
    }

    #[test]
    fn oversized_glyph_area_from_json_composes() {
        let mut style = IconStyle::default().scaled_to(64);
        style.glyph_size = 4_000_000_000;
        let style = IconStyle::from_json(&style.to_json().unwrap()).unwrap();

        let composer = IconComposer::new(style);
        let polygons = composer.glyph_polygons();
        assert!(polygons.iter().flat_map(|p| &p.points).any(|p| p.x == i32::MAX));

        let icon = composer.compose().unwrap();
        assert_eq!(icon.dimensions().width, 64);
    }
}
