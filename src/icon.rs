//! Icon image types.
//!
//! A composed icon is a single high-resolution [`IconImage`]. Container
//! formats embed several downscaled copies of it, grouped as an [`IconSet`].

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A single icon image with its display scale.
///
/// macOS bundles use @1x and @2x variants of the same logical size, so each
/// image records the scale it is meant to be displayed at.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in straight-alpha RGBA format.
    pub data: RgbaImage,

    /// The display scale factor.
    ///
    /// - 1.0 for standard resolution (@1x)
    /// - 2.0 for retina/HiDPI (@2x)
    pub scale: f32,
}

impl IconImage {
    /// Creates a new icon image with the given data and scale.
    pub fn new(data: RgbaImage, scale: f32) -> Self {
        Self { data, scale }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns a square copy resampled to `size` pixels at the given scale.
    ///
    /// Uses Lanczos3 filtering. A request for the current size returns a
    /// plain copy.
    pub fn resized(&self, size: u32, scale: f32) -> IconImage {
        let data = if self.data.width() == size && self.data.height() == size {
            self.data.clone()
        } else {
            imageops::resize(&self.data, size, size, FilterType::Lanczos3)
        };
        IconImage::new(data, scale)
    }

    /// Returns the raw RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.as_raw().clone()
    }
}

/// A collection of icon images representing a single icon at various sizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The individual icon images, in insertion order.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Builds one @1x square variant of `source` per entry in `sizes`.
    ///
    /// Order follows `sizes`.
    pub fn downscaled(source: &IconImage, sizes: &[u32]) -> Self {
        Self::from_images(sizes.iter().map(|&size| source.resized(size, 1.0)).collect())
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resized_keeps_solid_color() {
        let img = IconImage::new(RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255])), 1.0);
        let small = img.resized(16, 1.0);

        assert_eq!(small.dimensions(), SizePx::new(16, 16));
        let [r, g, b, a] = small.data.get_pixel(8, 8).0;
        assert!(r.abs_diff(10) <= 1 && g.abs_diff(20) <= 1 && b.abs_diff(30) <= 1);
        assert_eq!(a, 255);
    }

    #[test]
    fn downscaled_follows_size_order() {
        let img = IconImage::new(RgbaImage::new(64, 64), 1.0);
        let set = IconSet::downscaled(&img, &[48, 32, 16]);

        let sizes: Vec<_> = (&set).into_iter().map(|i| i.dimensions()).collect();
        assert_eq!(sizes, [SizePx::new(48, 48), SizePx::new(32, 32), SizePx::new(16, 16)]);
        assert!(set.images.iter().all(|i| i.scale == 1.0));
    }

    #[test]
    fn resized_to_current_size_is_a_copy() {
        let img = IconImage::new(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 4])), 1.0);
        let same = img.resized(8, 2.0);

        assert_eq!(same.data, img.data);
        assert_eq!(same.scale, 2.0);
        assert_eq!(same.to_rgba_bytes().len(), 8 * 8 * 4);
    }
}
