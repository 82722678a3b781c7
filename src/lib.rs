//! # zenrix
//!
//! Decoder for ColoRIX (`.RIX`, `.SCI`) palette-indexed images.
//!
//! ## Format
//!
//! A RIX file is a 10-byte header (`RIX` magic plus a revision byte, little-endian u16 width and
//! height, palette type, storage type), a palette of RGB triples, then one
//! index byte per pixel, rows top to bottom.
//!
//! | Palette type | Code | Entries | Channel range |
//! |---|---|---|---|
//! | [`PaletteType::Ega16`] | `0xAB` | 16 | `0..=3` |
//! | [`PaletteType::Vga256`] | `0xAF` | 256 | `0..=63` |
//!
//! Palette channels are rescaled to the full range of the output depth
//! (8-bit by default, 16-bit on request).
//!
//! ## Untrusted input
//!
//! Every stage is bounds-checked and fails with a [`RixError`] carrying a
//! stable [`tag`](RixError::tag) and [`class`](RixError::class). Buffers are
//! allocated fallibly. Pixels whose index is past the end of the palette are
//! left black and counted in [`DecodeOutput::out_of_range_pixels`]; they do
//! not fail the decode. Set [`Limits`] before decoding files you don't
//! control.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Compressed or encrypted ColoRIX storage types (a nonzero storage type
//!   is decoded as raw indices and reported as a warning)
//!
//! ## Usage
//!
//! ```no_run
//! use zenrix::{DecodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your RIX bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.palette_type);
//!
//! // Decode to RGB8
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! let first = decoded.pixel(0, 0);
//! # Ok::<(), zenrix::RixError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod diagnostic;
mod error;
mod info;
mod limits;
mod pixel;
pub mod registry;
pub mod rix;
pub mod stream;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use diagnostic::{
    Diagnostic, DiagnosticSink, INVALID_COLORMAP_INDEX, IgnoreDiagnostics, LogDiagnostics,
    Severity, UNKNOWN_STORAGE_TYPE,
};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{Buffer, ErrorClass, RixError};
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{OutputDepth, PixelLayout};
pub use registry::{CoderFlags, FormatEntry, Registry};
pub use rix::{PaletteProfile, PaletteType, Signature};

/// Whether `prefix` starts with the RIX magic (`RIX`, any revision byte).
///
/// Never fails and never needs more than [`rix::MAGIC_LEN`] bytes.
pub fn detect(prefix: &[u8]) -> bool {
    Signature::default().matches(prefix)
}

/// Decode a RIX image to RGB8 with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, RixError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read header metadata without decoding pixels.
pub fn probe(data: &[u8]) -> Result<ImageInfo, RixError> {
    ImageInfo::from_bytes(data)
}
