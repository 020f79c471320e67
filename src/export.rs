//! Writing a composed icon to disk.
//!
//! Three container formats are produced from one high-resolution source:
//!
//! | Target | File        | Contents                                     |
//! |--------|-------------|----------------------------------------------|
//! | PNG    | `icon.png`  | the source at full resolution                |
//! | ICNS   | `icon.icns` | PNG-backed macOS types from 16@2x to 512@2x  |
//! | ICO    | `icon.ico`  | 256, 128, 64, 48, 32, 24 and 16 px entries   |
//!
//! Each file is encoded in memory first and then written in one call, so an
//! encoding failure never leaves a truncated file behind.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use icns::{IconFamily, IconType, PixelFormat};
use ico::{IconDir, IconDirEntry, ResourceType};
use image::ImageFormat;
use tracing::{debug, info};

use crate::error::{IconError, Result};
use crate::icon::{IconImage, IconSet};

/// Sizes embedded in the ICO file, largest first.
pub const ICO_SIZES: [u32; 7] = [256, 128, 64, 48, 32, 24, 16];

/// ICNS icon types written, all PNG-backed.
pub const ICNS_TYPES: [IconType; 8] = [
    IconType::RGBA32_16x16_2x,
    IconType::RGBA32_32x32_2x,
    IconType::RGBA32_128x128,
    IconType::RGBA32_128x128_2x,
    IconType::RGBA32_256x256,
    IconType::RGBA32_256x256_2x,
    IconType::RGBA32_512x512,
    IconType::RGBA32_512x512_2x,
];

// ============================================================================
// ExportTarget
// ============================================================================

/// One output file: a container format plus the sizes it embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Single-resolution PNG at the source size.
    Png,
    /// Windows icon with one entry per size, in the given order.
    Ico { sizes: Vec<u32> },
    /// macOS icon family; sizes derive from [`ICNS_TYPES`].
    Icns,
}

impl ExportTarget {
    /// The standard set, in write order: PNG, ICNS, ICO.
    pub fn standard() -> Vec<ExportTarget> {
        vec![
            ExportTarget::Png,
            ExportTarget::Icns,
            ExportTarget::Ico {
                sizes: ICO_SIZES.to_vec(),
            },
        ]
    }

    /// File name written inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Png => "icon.png",
            Self::Ico { .. } => "icon.ico",
            Self::Icns => "icon.icns",
        }
    }

    /// Encodes `icon` into this target's file format.
    pub fn encode(&self, icon: &IconImage) -> Result<Vec<u8>> {
        match self {
            Self::Png => encode_png(icon),
            Self::Ico { sizes } => encode_ico(icon, sizes),
            Self::Icns => encode_icns(icon),
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Ico { .. } => "ICO",
            Self::Icns => "ICNS",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Encoders
// ============================================================================

fn encode_png(icon: &IconImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    icon.data.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn encode_ico(icon: &IconImage, sizes: &[u32]) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for variant in &IconSet::downscaled(icon, sizes) {
        let size = variant.data.width();
        let image = ico::IconImage::from_rgba_data(size, size, variant.to_rgba_bytes());
        let entry = IconDirEntry::encode(&image).map_err(IconError::EncodeIco)?;
        icon_dir.add_entry(entry);
        debug!(size, "added ICO entry");
    }

    let mut buf = Vec::new();
    icon_dir.write(&mut buf).map_err(IconError::EncodeIco)?;
    Ok(buf)
}

fn encode_icns(icon: &IconImage) -> Result<Vec<u8>> {
    let source = icon.data.width().min(icon.data.height());
    let mut family = IconFamily::new();

    for icon_type in ICNS_TYPES {
        let size = icon_type.pixel_width();
        if size > source {
            debug!(?icon_type, size, source, "skipping ICNS type larger than source");
            continue;
        }

        let variant = icon.resized(size, icon_type.pixel_density() as f32);
        let image = icns::Image::from_data(PixelFormat::RGBA, size, size, variant.to_rgba_bytes())
            .map_err(IconError::EncodeIcns)?;
        family
            .add_icon_with_type(&image, icon_type)
            .map_err(IconError::EncodeIcns)?;
        debug!(?icon_type, size, "added ICNS entry");
    }

    let mut buf = Vec::new();
    family.write(&mut buf).map_err(IconError::EncodeIcns)?;
    Ok(buf)
}

// ============================================================================
// Exporter
// ============================================================================

/// A file written by [`Exporter::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub target: ExportTarget,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    /// Paths of every written file, in write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }
}

/// Writes an icon to a directory in several formats.
///
/// # Example
///
/// ```no_run
/// use treeglyph_icons::{Exporter, IconComposer};
///
/// let icon = IconComposer::default().compose()?;
/// let report = Exporter::new("build").export(&icon)?;
/// assert_eq!(report.files.len(), 3);
/// # Ok::<(), treeglyph_icons::IconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
    out_dir: PathBuf,
    targets: Vec<ExportTarget>,
}

impl Exporter {
    /// Creates an exporter for the standard targets.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_targets(out_dir, ExportTarget::standard())
    }

    /// Creates an exporter for an explicit list of targets.
    pub fn with_targets(out_dir: impl Into<PathBuf>, targets: Vec<ExportTarget>) -> Self {
        Self {
            out_dir: out_dir.into(),
            targets,
        }
    }

    /// The directory files are written into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Creates the output directory and writes every target.
    ///
    /// Existing files are overwritten. The first failure aborts the run.
    pub fn export(&self, icon: &IconImage) -> Result<ExportReport> {
        fs::create_dir_all(&self.out_dir).map_err(|source| IconError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut report = ExportReport::default();
        for target in &self.targets {
            let bytes = target.encode(icon)?;
            let path = self.out_dir.join(target.file_name());
            fs::write(&path, &bytes).map_err(|source| IconError::Write {
                path: path.clone(),
                source,
            })?;

            info!(%target, path = %path.display(), bytes = bytes.len(), "wrote icon file");
            report.files.push(ExportedFile {
                target: target.clone(),
                path,
                bytes: bytes.len(),
            });
        }

        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================
