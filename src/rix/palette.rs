use alloc::vec::Vec;

use crate::error::{Buffer, RixError};
use crate::stream::ByteSource;

use super::alloc_zeroed;

/// Palette variants this decoder understands.
///
/// This is the complete set: any other type code is rejected with
/// [`RixError::UnsupportedPaletteType`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteType {
    /// 16 entries of 2-bit channels (EGA, 64-color gamut). Code `0xAB`.
    Ega16,
    /// 256 entries of 6-bit channels (VGA DAC). Code `0xAF`.
    Vga256,
}

impl PaletteType {
    /// Every supported palette type.
    pub const ALL: [PaletteType; 2] = [PaletteType::Ega16, PaletteType::Vga256];

    /// Resolve a header palette-type code.
    pub fn from_code(code: u8) -> Result<Self, RixError> {
        match code {
            0xAB => Ok(Self::Ega16),
            0xAF => Ok(Self::Vga256),
            other => Err(RixError::UnsupportedPaletteType(other)),
        }
    }

    /// Header code for this type.
    pub const fn code(self) -> u8 {
        match self {
            Self::Ega16 => 0xAB,
            Self::Vga256 => 0xAF,
        }
    }

    pub const fn profile(self) -> PaletteProfile {
        match self {
            Self::Ega16 => PaletteProfile {
                entry_count: 16,
                max_channel_value: 3,
            },
            Self::Vga256 => PaletteProfile {
                entry_count: 256,
                max_channel_value: 63,
            },
        }
    }
}

/// Shape of a palette: how many entries and how many bits each channel holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaletteProfile {
    pub entry_count: u16,
    /// Largest raw channel value, i.e. full intensity.
    pub max_channel_value: u8,
}

impl PaletteProfile {
    /// Bytes the palette occupies on disk (3 per entry).
    pub const fn byte_len(&self) -> usize {
        self.entry_count as usize * 3
    }
}

/// Raw palette as stored in the file: `entry_count` RGB triples, unscaled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    rgb: Vec<u8>,
}

impl Palette {
    /// Read the palette that follows the header.
    pub(crate) fn read<S: ByteSource + ?Sized>(
        source: &mut S,
        profile: PaletteProfile,
    ) -> Result<Self, RixError> {
        let expected = profile.byte_len();
        let mut rgb = alloc_zeroed(expected, Buffer::Palette)?;
        let actual = source.read_fill(&mut rgb)?;
        if actual < expected {
            return Err(RixError::TruncatedPalette { expected, actual });
        }
        Ok(Self { rgb })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rgb.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.rgb.is_empty()
    }

    /// Raw `[r, g, b]` of entry `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<[u8; 3]> {
        let start = index.checked_mul(3)?;
        match self.rgb.get(start..start.checked_add(3)?)? {
            &[r, g, b] => Some([r, g, b]),
            _ => None,
        }
    }
}
