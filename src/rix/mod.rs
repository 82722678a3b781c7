//! ColoRIX (RIX) decoder.
//!
//! A RIX file is a 10-byte header, a palette of 16 or 256 RGB triples, then
//! one index byte per pixel, rows top to bottom, no padding and no
//! compression.

mod header;
mod palette;
mod scanline;
mod signature;

pub use header::{HEADER_LEN, RixHeader};
pub use palette::{Palette, PaletteProfile, PaletteType};
pub use scanline::scale_channel;
pub use signature::{MAGIC_LEN, Signature};

use alloc::vec::Vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::diagnostic::{
    Diagnostic, DiagnosticSink, INVALID_COLORMAP_INDEX, UNKNOWN_STORAGE_TYPE,
};
use crate::error::{Buffer, RixError};
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::OutputDepth;
use crate::stream::{ByteSource, SliceSource};

/// Per-call decode configuration.
#[derive(Clone, Debug, Default)]
pub(crate) struct DecodeOptions<'a> {
    pub limits: Option<&'a Limits>,
    pub signature: Signature,
    pub depth: OutputDepth,
}

/// Zero-filled buffer, reporting allocation failure instead of aborting.
pub(crate) fn alloc_zeroed(len: usize, buffer: Buffer) -> Result<Vec<u8>, RixError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RixError::OutOfMemory { buffer, bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Read the header and resolve its palette type without touching pixel data.
pub(crate) fn probe(data: &[u8], signature: &Signature) -> Result<ImageInfo, RixError> {
    let header = header::read_header(&mut SliceSource::new(data), signature)?;
    let palette_type = PaletteType::from_code(header.palette_type)?;
    Ok(ImageInfo::new(header, palette_type))
}

/// Decode a whole image, depositing diagnostics into `sink`.
///
/// On failure the error is also reported to `sink` as a single
/// [`Severity::Error`](crate::Severity::Error) record.
pub(crate) fn decode<S: ByteSource + ?Sized>(
    source: &mut S,
    options: &DecodeOptions<'_>,
    sink: &mut dyn DiagnosticSink,
    stop: &dyn Stop,
) -> Result<DecodeOutput, RixError> {
    decode_inner(source, options, sink, stop).inspect_err(|e| {
        log::debug!("RIX decode failed: {e}");
        sink.report(Diagnostic::from_error(e));
    })
}

fn decode_inner<S: ByteSource + ?Sized>(
    source: &mut S,
    options: &DecodeOptions<'_>,
    sink: &mut dyn DiagnosticSink,
    stop: &dyn Stop,
) -> Result<DecodeOutput, RixError> {
    let header = header::read_header(source, &options.signature)?;
    let width = u32::from(header.width);
    let height = u32::from(header.height);
    log::debug!(
        "RIX header: {width}x{height}, palette type 0x{:02x}, storage type 0x{:02x}",
        header.palette_type,
        header.storage_type
    );

    if let Some(limits) = options.limits {
        limits.check(width, height)?;
    }

    let palette_type = PaletteType::from_code(header.palette_type)?;
    let profile = palette_type.profile();
    log::trace!(
        "RIX palette: {:?}, {} entries, max channel value {}",
        palette_type,
        profile.entry_count,
        profile.max_channel_value
    );

    stop.check()?;
    let palette = Palette::read(source, profile)?;

    let layout = options.depth.layout();
    let out_bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(RixError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = options.limits {
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;
    let mut raster = Vec::new();
    let out_of_range = scanline::decode_scanlines(
        source,
        width as usize,
        height as usize,
        &palette,
        profile,
        options.depth,
        &mut raster,
        out_bytes,
        stop,
    )?;

    if header.storage_type != 0 {
        log::warn!(
            "RIX: storage type 0x{:02x} is not plain indices; decoding as raw",
            header.storage_type
        );
        sink.report(Diagnostic::warning(
            UNKNOWN_STORAGE_TYPE,
            alloc::format!(
                "storage type 0x{:02x} may be compressed or encrypted; pixels were read as raw indices",
                header.storage_type
            ),
        ));
    }
    if out_of_range > 0 {
        log::warn!(
            "RIX: {out_of_range} pixels referenced palette entries beyond {}",
            profile.entry_count
        );
        sink.report(Diagnostic::warning(
            INVALID_COLORMAP_INDEX,
            alloc::format!(
                "{out_of_range} pixels use an index past the {}-entry palette and were left black",
                profile.entry_count
            ),
        ));
    }

    Ok(DecodeOutput::new(
        raster,
        width,
        height,
        layout,
        palette_type,
        out_of_range,
    ))
}

#[cfg(test)]
mod tests {
    use super::alloc_zeroed;
    use crate::error::{Buffer, ErrorClass, RixError};

    #[test]
    fn impossible_allocation_is_out_of_memory() {
        for buffer in [Buffer::Palette, Buffer::Scanline, Buffer::Raster] {
            let err = alloc_zeroed(usize::MAX, buffer).unwrap_err();
            assert!(matches!(
                err,
                RixError::OutOfMemory { buffer: b, bytes: usize::MAX } if b == buffer
            ));
            assert_eq!(err.tag(), "MemoryAllocationFailed");
            assert_eq!(err.class(), ErrorClass::ResourceExhaustion);
        }
    }

    #[test]
    fn small_allocation_is_zeroed() {
        assert_eq!(alloc_zeroed(4, Buffer::Scanline).unwrap(), [0, 0, 0, 0]);
    }
}
