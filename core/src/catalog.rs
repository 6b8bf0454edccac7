use serde::{Deserialize, Serialize};

/// One icon variant: a logical point size rendered at a display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeSpec {
    pub point_size: u32,
    pub scale: u32,
}

impl SizeSpec {
    pub const fn new(point_size: u32, scale: u32) -> Self {
        Self { point_size, scale }
    }

    /// Edge length in pixels of the rendered (square) image.
    pub const fn pixel_width(&self) -> u32 {
        self.point_size * self.scale
    }

    /// File name used both on disk and in the manifest.
    ///
    /// `icon_16x16.png` at 1x, `icon_16x16@2x.png` at 2x; any other scale
    /// above one gets the same `@{scale}x` suffix.
    pub fn filename(&self) -> String {
        let p = self.point_size;
        if self.scale > 1 {
            format!("icon_{p}x{p}@{}x.png", self.scale)
        } else {
            format!("icon_{p}x{p}.png")
        }
    }

    /// Manifest `size` field, e.g. `"128x128"`.
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.point_size)
    }

    /// Manifest `scale` field, e.g. `"2x"`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// Every macOS app icon variant, in manifest order.
pub const SIZE_CATALOG: [SizeSpec; 10] = [
    SizeSpec::new(16, 1),
    SizeSpec::new(16, 2),
    SizeSpec::new(32, 1),
    SizeSpec::new(32, 2),
    SizeSpec::new(128, 1),
    SizeSpec::new(128, 2),
    SizeSpec::new(256, 1),
    SizeSpec::new(256, 2),
    SizeSpec::new(512, 1),
    SizeSpec::new(512, 2),
];
