//! Drawing layers used by [`IconComposer`](crate::IconComposer).
//!
//! Each layer owns an optional configuration and an enabled flag, and knows
//! how to paint itself onto the shared canvas in a [`RenderContext`].
//!
//! # Architecture
//!
//! Each layer config implements [`LayerEffect`]. The [`LayerPipeline`] holds
//! one [`Layer`] per drawing step and applies them in a fixed order, since
//! later layers paint over earlier ones.

pub mod background;
pub mod border;
pub mod glyph;

pub use background::BackgroundConfig;
pub use border::BorderConfig;
pub use glyph::GlyphConfig;

use resvg::tiny_skia::Pixmap;
use tracing::debug;

use crate::error::Result;
use crate::icon::IconImage;
use crate::raster::{new_canvas, pixmap_to_rgba_image};
use crate::style::IconStyle;

// ============================================================================
// Render Context
// ============================================================================

/// The canvas that flows through the pipeline.
pub struct RenderContext {
    /// Premultiplied drawing surface.
    pub canvas: Pixmap,
}

impl RenderContext {
    /// Creates a context around a fresh transparent `size` x `size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        Ok(Self {
            canvas: new_canvas(size)?,
        })
    }

    /// Side length of the square canvas.
    pub fn size(&self) -> u32 {
        self.canvas.width()
    }

    /// Finishes drawing and converts the canvas to a straight-alpha image.
    pub fn into_image(self) -> IconImage {
        IconImage::new(pixmap_to_rgba_image(&self.canvas), 1.0)
    }
}

// ============================================================================
// Layer Traits
// ============================================================================

/// Trait for layer configurations that know how to draw themselves.
pub trait LayerEffect: Clone {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Paints this layer onto `ctx.canvas`.
    fn draw(&self, ctx: &mut RenderContext) -> Result<()>;
}

// ============================================================================
// Generic Layer
// ============================================================================

/// A layer with an optional configuration and an enabled toggle.
///
/// Disabling a layer keeps its configuration so it can be re-enabled later.
#[derive(Debug, Clone)]
pub struct Layer<C> {
    config: Option<C>,
    enabled: bool,
}

impl<C> Default for Layer<C> {
    fn default() -> Self {
        Self {
            config: None,
            enabled: true,
        }
    }
}

impl<C> Layer<C> {
    /// Creates an enabled layer with the given configuration.
    pub fn new(config: C) -> Self {
        Self {
            config: Some(config),
            enabled: true,
        }
    }

    /// Returns the current configuration, if any.
    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: Option<C>) {
        self.config = config;
    }

    /// Returns true if this layer is active (has config AND is enabled).
    pub fn is_active(&self) -> bool {
        self.enabled && self.config.is_some()
    }

    /// Returns whether the layer is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets whether the layer is enabled.
    ///
    /// Returns true if the enabled state changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }
}

impl<C: LayerEffect> Layer<C> {
    /// Draws this layer if it is active; otherwise leaves the canvas untouched.
    pub fn apply(&self, ctx: &mut RenderContext) -> Result<()> {
        let Some(config) = self.config.as_ref().filter(|_| self.enabled) else {
            debug!(layer = C::NAME, "skipping inactive layer");
            return Ok(());
        };

        debug!(layer = C::NAME, "drawing layer");
        config.draw(ctx)
    }
}

// ============================================================================
// Layer Pipeline
// ============================================================================

/// The ordered set of drawing layers.
///
/// ```text
/// Transparent canvas
///     │
///     ▼
/// ┌────────────┐
/// │ Background │  rounded square, accent fill
/// └─────┬──────┘
///       ▼
/// ┌────────────┐
/// │   Border   │  same shape, translucent stroke
/// └─────┬──────┘
///       ▼
/// ┌────────────┐
/// │   Glyph    │  three stacked polygons
/// └────────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayerPipeline {
    pub background: Layer<BackgroundConfig>,
    pub border: Layer<BorderConfig>,
    pub glyph: Layer<GlyphConfig>,
}

impl LayerPipeline {
    /// Configures every layer from a style.
    pub fn from_style(style: &IconStyle) -> Self {
        Self {
            background: Layer::new(BackgroundConfig::from_style(style)),
            border: Layer::new(BorderConfig::from_style(style)),
            glyph: Layer::new(GlyphConfig::from_style(style)),
        }
    }

    /// Applies every layer, in order, onto a fresh `size` x `size` canvas.
    pub fn render(&self, size: u32) -> Result<IconImage> {
        let mut ctx = RenderContext::new(size)?;

        self.background.apply(&mut ctx)?;
        self.border.apply(&mut ctx)?;
        self.glyph.apply(&mut ctx)?;

        Ok(ctx.into_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pipeline_renders_transparent_canvas() {
        let image = LayerPipeline::default().render(16).unwrap();
        assert_eq!(image.dimensions().width, 16);
        assert!(image.data.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn layer_toggle_keeps_config() {
        let mut layer = Layer::new(BorderConfig::from_style(&IconStyle::default()));
        assert!(layer.is_active());

        assert!(layer.set_enabled(false));
        assert!(!layer.set_enabled(false));
        assert!(!layer.is_active());
        assert!(layer.config().is_some());

        layer.set_config(None);
        layer.set_enabled(true);
        assert!(!layer.is_active());
    }

    #[test]
    fn disabled_layer_leaves_canvas_untouched() {
        let style = IconStyle::default().scaled_to(64);
        let mut pipeline = LayerPipeline::from_style(&style);
        pipeline.background.set_enabled(false);
        pipeline.border.set_enabled(false);
        pipeline.glyph.set_enabled(false);

        let image = pipeline.render(64).unwrap();
        assert!(image.data.pixels().all(|p| p.0[3] == 0));
    }
}
