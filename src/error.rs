//! Error types for icon composition and export.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while drawing or writing an icon.
///
/// Every variant is fatal: inputs are constants, so a failure points at the
/// environment (filesystem, codec) rather than at something worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("invalid geometry: {0}")]
    Geometry(&'static str),

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    EncodePng(#[from] image::ImageError),

    #[error("failed to encode ICO: {0}")]
    EncodeIco(#[source] io::Error),

    #[error("failed to encode ICNS: {0}")]
    EncodeIcns(#[source] io::Error),

    #[error("failed to read style {}: {source}", path.display())]
    ReadStyle {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid style: {0}")]
    Style(#[from] serde_json::Error),
}

/// Shorthand for results carrying an [`IconError`].
pub type Result<T> = std::result::Result<T, IconError>;
