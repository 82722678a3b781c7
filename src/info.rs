use crate::error::RixError;
use crate::rix::{PaletteProfile, PaletteType, RixHeader, Signature};

/// Image metadata read from the header, without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub palette_type: PaletteType,
    pub palette: PaletteProfile,
    /// Raw storage-type byte from the header.
    pub storage_type: u8,
}

impl ImageInfo {
    pub(crate) fn new(header: RixHeader, palette_type: PaletteType) -> Self {
        Self {
            width: u32::from(header.width),
            height: u32::from(header.height),
            palette_type,
            palette: palette_type.profile(),
            storage_type: header.storage_type,
        }
    }

    /// Probe a RIX header using the default `RIX` signature.
    pub fn from_bytes(data: &[u8]) -> Result<Self, RixError> {
        crate::rix::probe(data, &Signature::default())
    }

    /// Probe a RIX header, accepting `signature` as the magic.
    pub fn from_bytes_with_signature(data: &[u8], signature: Signature) -> Result<Self, RixError> {
        crate::rix::probe(data, &signature)
    }
}
