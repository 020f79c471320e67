//! Serializable icon style.
//!
//! An [`IconStyle`] captures every color and geometric constant the composer
//! uses. The default style reproduces the reference icon; a JSON document can
//! override any subset of fields.
//!
//! # Example
//!
//! ```
//! use treeglyph_icons::{ColorRgba, IconStyle};
//!
//! let style = IconStyle::default().with_glyph_color(ColorRgba::new(0, 0, 0, 255));
//! let json = style.to_json().unwrap();
//!
//! let restored = IconStyle::from_json(&json).unwrap();
//! assert_eq!(restored.glyph_color, ColorRgba::new(0, 0, 0, 255));
//! ```

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::glyph::GlyphArea;

// ============================================================================
// ColorRgba
// ============================================================================

/// A straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a lighter tone by raising HSL lightness by `amount` (0.0-1.0).
    ///
    /// Alpha is left unchanged.
    pub fn lighten(&self, amount: f32) -> Self {
        let rgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut hsl: Hsl = rgb.into_color();
        hsl.lightness = (hsl.lightness + amount).min(1.0);
        let lightened: Srgb = hsl.into_color();
        Self::new(
            (lightened.red * 255.0).round() as u8,
            (lightened.green * 255.0).round() as u8,
            (lightened.blue * 255.0).round() as u8,
            self.a,
        )
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

// ============================================================================
// IconStyle
// ============================================================================

/// Toolbar accent used for the background.
pub const DEFAULT_ACCENT: ColorRgba = ColorRgba::new(217, 119, 87, 255);
/// Light translucent tone used for the border.
pub const DEFAULT_BORDER: ColorRgba = ColorRgba::new(246, 193, 171, 170);
/// Near-black fill used for the glyph.
pub const DEFAULT_GLYPH: ColorRgba = ColorRgba::new(24, 20, 26, 255);

/// Lightness increase applied by [`IconStyle::from_accent`].
const BORDER_LIGHTEN: f32 = 0.2;

/// All colors and dimensions used to compose an icon.
///
/// # JSON Format
///
/// Fields are camelCase and all optional; missing fields take the defaults.
///
/// ```json
/// {
///   "canvasSize": 1024,
///   "backgroundInset": 48,
///   "cornerRadius": 220,
///   "accent": { "r": 217, "g": 119, "b": 87, "a": 255 },
///   "borderColor": { "r": 246, "g": 193, "b": 171, "a": 170 },
///   "borderWidth": 8,
///   "glyphPadding": 208,
///   "glyphSize": 608,
///   "glyphColor": { "r": 24, "g": 20, "b": 26, "a": 255 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconStyle {
    /// Width and height of the square canvas in pixels.
    pub canvas_size: u32,

    /// Distance from each canvas edge to the rounded background.
    pub background_inset: u32,

    /// Corner radius of the background and border.
    pub corner_radius: f32,

    /// Background fill color.
    pub accent: ColorRgba,

    /// Border stroke color.
    pub border_color: ColorRgba,

    /// Border stroke width. Zero disables the border.
    pub border_width: f32,

    /// Offset from the canvas edge to the glyph drawing area.
    pub glyph_padding: i32,

    /// Side length of the glyph drawing area.
    pub glyph_size: u32,

    /// Glyph fill color.
    pub glyph_color: ColorRgba,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            canvas_size: 1024,
            background_inset: 48,
            corner_radius: 220.0,
            accent: DEFAULT_ACCENT,
            border_color: DEFAULT_BORDER,
            border_width: 8.0,
            glyph_padding: 208,
            glyph_size: 608,
            glyph_color: DEFAULT_GLYPH,
        }
    }
}

impl IconStyle {
    /// Creates the reference style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style around a different accent color.
    ///
    /// The border becomes a lighter, translucent tone of the accent.
    pub fn from_accent(accent: ColorRgba) -> Self {
        Self {
            accent,
            border_color: accent
                .lighten(BORDER_LIGHTEN)
                .with_alpha(DEFAULT_BORDER.a),
            ..Self::default()
        }
    }

    /// Sets the glyph fill color.
    pub fn with_glyph_color(mut self, color: ColorRgba) -> Self {
        self.glyph_color = color;
        self
    }

    /// Sets the canvas size, scaling every dimension proportionally.
    pub fn scaled_to(mut self, canvas_size: u32) -> Self {
        let factor = canvas_size as f32 / self.canvas_size as f32;
        let scale_u32 = |v: u32| (v as f32 * factor).round() as u32;
        self.background_inset = scale_u32(self.background_inset);
        self.corner_radius *= factor;
        self.border_width *= factor;
        self.glyph_padding = (self.glyph_padding as f32 * factor).round() as i32;
        self.glyph_size = scale_u32(self.glyph_size);
        self.canvas_size = canvas_size;
        self
    }

    /// The area the glyph grid is projected into.
    pub fn glyph_area(&self) -> GlyphArea {
        GlyphArea::new(self.glyph_padding, self.glyph_size)
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let style = IconStyle::default();
        assert_eq!(style.canvas_size, 1024);
        assert_eq!(style.background_inset, 48);
        assert_eq!(style.corner_radius, 220.0);
        assert_eq!(style.border_width, 8.0);
        assert_eq!(style.glyph_area(), GlyphArea::new(208, 608));
        assert_eq!(style.accent, ColorRgba::new(217, 119, 87, 255));
    }

    #[test]
    fn style_serialization_roundtrip() {
        let style = IconStyle::from_accent(ColorRgba::new(40, 90, 200, 255))
            .with_glyph_color(ColorRgba::new(250, 250, 250, 240));

        let json = style.to_json().unwrap();
        let restored = IconStyle::from_json(&json).unwrap();

        assert_eq!(restored, style);
    }

    #[test]
    fn style_json_format() {
        let json = IconStyle::default().to_json_pretty().unwrap();

        assert!(json.contains("\"canvasSize\""));
        assert!(json.contains("\"borderColor\""));
        assert!(json.contains("\"glyphPadding\""));
    }

    #[test]
    fn empty_style_deserializes_to_default() {
        let style = IconStyle::from_json("{}").unwrap();
        assert_eq!(style, IconStyle::default());
    }

    #[test]
    fn partial_style_keeps_other_defaults() {
        let style = IconStyle::from_json(r#"{"glyphColor":{"r":1,"g":2,"b":3,"a":4}}"#).unwrap();
        assert_eq!(style.glyph_color, ColorRgba::new(1, 2, 3, 4));
        assert_eq!(style.accent, DEFAULT_ACCENT);
    }

    #[test]
    fn from_accent_derives_lighter_border() {
        let accent = ColorRgba::new(30, 80, 160, 255);
        let style = IconStyle::from_accent(accent);

        let sum = |c: ColorRgba| c.r as u32 + c.g as u32 + c.b as u32;
        assert!(sum(style.border_color) > sum(accent));
        assert_eq!(style.border_color.a, DEFAULT_BORDER.a);
    }

    #[test]
    fn lighten_saturates_at_white() {
        let white = ColorRgba::new(255, 255, 255, 10).lighten(0.5);
        assert_eq!(white, ColorRgba::new(255, 255, 255, 10));
    }

    #[test]
    fn scaled_to_halves_dimensions() {
        let style = IconStyle::default().scaled_to(512);
        assert_eq!(style.canvas_size, 512);
        assert_eq!(style.background_inset, 24);
        assert_eq!(style.corner_radius, 110.0);
        assert_eq!(style.glyph_area(), GlyphArea::new(104, 304));
    }
}
