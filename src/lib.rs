//! treeglyph-icons: procedural app icon generator
//!
//! This crate draws the application icon (a rounded-square background with
//! a three-tier "tree" glyph) and writes it as PNG, ICO and ICNS.
//!
//! # Example
//!
//! ```no_run
//! use treeglyph_icons::{Exporter, IconComposer};
//!
//! let icon = IconComposer::default().compose()?;
//! let report = Exporter::new("build").export(&icon)?;
//!
//! for path in report.paths() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), treeglyph_icons::IconError>(())
//! ```
//!
//! # Styles
//!
//! Colors and geometry live in an [`IconStyle`], which round-trips through
//! JSON:
//!
//! ```
//! use treeglyph_icons::{IconComposer, IconStyle};
//!
//! let json = IconStyle::default().scaled_to(64).to_json().unwrap();
//! let style = IconStyle::from_json(&json).unwrap();
//!
//! let icon = IconComposer::new(style).compose().unwrap();
//! assert_eq!(icon.dimensions().width, 64);
//! ```

mod composer;
mod error;
mod export;
mod glyph;
mod icon;
mod layer;
mod raster;
mod style;

pub use composer::IconComposer;
pub use error::{IconError, Result};
pub use export::{ExportReport, ExportTarget, ExportedFile, Exporter, ICNS_TYPES, ICO_SIZES};
pub use glyph::{
    GRID_UNITS, GlyphArea, GridPoint, PointPx, Polygon, TIER_STEP, TREE_GLYPH, Tier, layout,
    map_point,
};
pub use icon::{IconImage, IconSet, SizePx};
pub use layer::{
    BackgroundConfig, BorderConfig, GlyphConfig, Layer, LayerEffect, LayerPipeline,
    RenderContext,
};
pub use style::{ColorRgba, IconStyle};
