/// Output channel depth for decoded pixels.
///
/// RIX palettes store 2-bit or 6-bit channels; every channel is rescaled to
/// the full range of the chosen depth.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputDepth {
    /// 8 bits per channel, `0..=255`.
    #[default]
    Eight,
    /// 16 bits per channel, `0..=65535`, stored native endian.
    Sixteen,
}

impl OutputDepth {
    /// Largest channel value at this depth.
    pub const fn max_value(self) -> u32 {
        match self {
            Self::Eight => 0xFF,
            Self::Sixteen => 0xFFFF,
        }
    }

    /// Pixel layout produced at this depth.
    pub const fn layout(self) -> PixelLayout {
        match self {
            Self::Eight => PixelLayout::Rgb8,
            Self::Sixteen => PixelLayout::Rgb16,
        }
    }
}

/// Pixel memory layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 3 channels, 16-bit RGB (native endian).
    Rgb16,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        self.channels() * self.bytes_per_channel()
    }

    /// Bytes per channel sample.
    pub fn bytes_per_channel(&self) -> usize {
        match self {
            Self::Rgb8 => 1,
            Self::Rgb16 => 2,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        3
    }
}

/// Pixel types that decoded RIX data can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    /// Layout this pixel type reinterprets.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}
