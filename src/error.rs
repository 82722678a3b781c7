use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use enough::StopReason;

/// Errors from RIX probing and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RixError {
    #[error("unexpected end of input in header: need 10 bytes, got {actual}")]
    TruncatedHeader { actual: usize },

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("unsupported palette type: 0x{0:02x}")]
    UnsupportedPaletteType(u8),

    #[error("unexpected end of input in palette: need {expected} bytes, got {actual}")]
    TruncatedPalette { expected: usize, actual: usize },

    #[error("unexpected end of input in scanline {row}: need {expected} bytes, got {actual}")]
    TruncatedScanline {
        row: u32,
        expected: usize,
        actual: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("failed to allocate {bytes} bytes for {buffer}")]
    OutOfMemory { buffer: Buffer, bytes: usize },

    #[error("I/O error: {0}")]
    Io(#[source] Box<dyn core::error::Error + Send + Sync>),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RixError {
    fn from(r: StopReason) -> Self {
        RixError::Cancelled(r)
    }
}

/// Which working buffer an allocation failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    Palette,
    Scanline,
    Raster,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Buffer::Palette => "palette",
            Buffer::Scanline => "scanline buffer",
            Buffer::Raster => "output raster",
        })
    }
}

/// Coarse failure class, for callers that only need to decide what to do
/// with the input.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Malformed, truncated or unreadable input. Reject or skip the file.
    CorruptInput,
    /// Structurally a RIX file, but using a palette type this decoder does not know.
    UnsupportedVariant,
    /// An allocation failed or a configured limit was hit.
    ResourceExhaustion,
    /// The caller's [`enough::Stop`] requested cancellation.
    Cancelled,
    /// The caller asked for something the decoded image cannot provide.
    InvalidRequest,
}

impl RixError {
    /// The failure class of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::TruncatedHeader { .. }
            | Self::UnrecognizedFormat
            | Self::InvalidDimensions { .. }
            | Self::TruncatedPalette { .. }
            | Self::TruncatedScanline { .. }
            | Self::Io(_) => ErrorClass::CorruptInput,
            Self::UnsupportedPaletteType(_) => ErrorClass::UnsupportedVariant,
            Self::DimensionsTooLarge { .. }
            | Self::LimitExceeded(_)
            | Self::OutOfMemory { .. } => ErrorClass::ResourceExhaustion,
            Self::Cancelled(_) => ErrorClass::Cancelled,
            Self::LayoutMismatch { .. } => ErrorClass::InvalidRequest,
        }
    }

    /// Stable machine-readable tag naming the failed condition.
    ///
    /// Tags never change between releases; match on these rather than on
    /// the `Display` text.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TruncatedHeader { .. } => "UnableToReadImageHeader",
            Self::UnrecognizedFormat => "ImproperImageHeader",
            Self::InvalidDimensions { .. } => "NegativeOrZeroImageSize",
            Self::UnsupportedPaletteType(_) => "UnsupportedPaletteType",
            Self::TruncatedPalette { .. } | Self::TruncatedScanline { .. } => {
                "UnexpectedEndOfFile"
            }
            Self::DimensionsTooLarge { .. } => "WidthOrHeightExceedsLimit",
            Self::LimitExceeded(_) => "ResourceLimitExceeded",
            Self::OutOfMemory { .. } => "MemoryAllocationFailed",
            Self::Io(_) => "UnableToReadBlob",
            Self::Cancelled(_) => "OperationCancelled",
            Self::LayoutMismatch { .. } => "PixelLayoutMismatch",
        }
    }
}
