use crate::error::RixError;
use crate::stream::ByteSource;

use super::signature::Signature;

/// Size of the fixed RIX header.
pub const HEADER_LEN: usize = 10;

/// Parsed RIX header.
///
/// ```text
/// 0..4  magic
/// 4..6  width         u16 LE
/// 6..8  height        u16 LE
/// 8     palette type
/// 9     storage type
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RixHeader {
    pub width: u16,
    pub height: u16,
    /// Raw palette-type code; resolved by [`super::PaletteType::from_code`].
    pub palette_type: u8,
    /// Raw storage-type byte. Only 0 (plain indices) is understood; other
    /// values are decoded the same way and produce a warning.
    pub storage_type: u8,
}

impl RixHeader {
    /// Decode the header fields from exactly [`HEADER_LEN`] bytes.
    pub(crate) fn parse(bytes: &[u8; HEADER_LEN], signature: &Signature) -> Result<Self, RixError> {
        if !signature.matches(bytes) {
            return Err(RixError::UnrecognizedFormat);
        }
        let width = u16::from_le_bytes([bytes[4], bytes[5]]);
        let height = u16::from_le_bytes([bytes[6], bytes[7]]);
        if width == 0 || height == 0 {
            return Err(RixError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            palette_type: bytes[8],
            storage_type: bytes[9],
        })
    }
}

/// Read and validate the header, consuming exactly [`HEADER_LEN`] bytes.
pub(crate) fn read_header<S: ByteSource + ?Sized>(
    source: &mut S,
    signature: &Signature,
) -> Result<RixHeader, RixError> {
    let mut bytes = [0u8; HEADER_LEN];
    let got = source.read_fill(&mut bytes)?;
    if got < HEADER_LEN {
        return Err(RixError::TruncatedHeader { actual: got });
    }
    RixHeader::parse(&bytes, signature)
}
