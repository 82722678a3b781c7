//! Index rows to RGB pixels.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::{Buffer, RixError};
use crate::pixel::OutputDepth;
use crate::stream::ByteSource;

use super::alloc_zeroed;
use super::palette::{Palette, PaletteProfile};

/// Rescale one raw palette channel to `0..=output_max`.
///
/// Computes `round(raw * output_max / max_channel_value)`, rounding halves up.
/// Raw values above `max_channel_value` saturate at `output_max`.
#[inline]
pub fn scale_channel(raw: u8, max_channel_value: u8, output_max: u32) -> u32 {
    if max_channel_value == 0 {
        return 0;
    }
    let max = u32::from(max_channel_value);
    let raw = u32::from(raw).min(max);
    (raw * output_max + max / 2) / max
}

#[inline]
fn write_pixel(out: &mut [u8], rgb: [u8; 3], max_channel_value: u8, depth: OutputDepth) {
    let output_max = depth.max_value();
    match depth {
        OutputDepth::Eight => {
            for (dst, &c) in out.iter_mut().zip(rgb.iter()) {
                *dst = scale_channel(c, max_channel_value, output_max) as u8;
            }
        }
        OutputDepth::Sixteen => {
            for (dst, &c) in out.chunks_exact_mut(2).zip(rgb.iter()) {
                let v = scale_channel(c, max_channel_value, output_max) as u16;
                dst.copy_from_slice(&v.to_ne_bytes());
            }
        }
    }
}

/// Grow `raster` by one zeroed row, doubling capacity up to `raster_len`.
///
/// The raster only ever holds rows whose indices have already been read, so
/// a header that promises more pixels than the input carries cannot force a
/// large allocation.
pub(crate) fn grow_raster(
    raster: &mut Vec<u8>,
    row_bytes: usize,
    raster_len: usize,
) -> Result<(), RixError> {
    let needed = raster
        .len()
        .checked_add(row_bytes)
        .ok_or(RixError::OutOfMemory {
            buffer: Buffer::Raster,
            bytes: usize::MAX,
        })?;
    if needed > raster.capacity() {
        let target = needed.max(raster.capacity().saturating_mul(2).min(raster_len));
        raster
            .try_reserve_exact(target - raster.len())
            .map_err(|_| RixError::OutOfMemory {
                buffer: Buffer::Raster,
                bytes: target,
            })?;
    }
    raster.resize(needed, 0);
    Ok(())
}

/// Decode `height` index rows into `raster`, top row first.
///
/// `raster` starts empty and gains one row per scanline read; on success it
/// is exactly `raster_len` bytes. Pixels whose index has no palette entry
/// stay zero. Returns how many such pixels were seen.
#[allow(clippy::too_many_arguments)]
pub(crate) fn decode_scanlines<S: ByteSource + ?Sized>(
    source: &mut S,
    width: usize,
    height: usize,
    palette: &Palette,
    profile: PaletteProfile,
    depth: OutputDepth,
    raster: &mut Vec<u8>,
    raster_len: usize,
    stop: &dyn Stop,
) -> Result<u64, RixError> {
    let bpp = depth.layout().bytes_per_pixel();
    let row_bytes = width * bpp;
    let mut indices = alloc_zeroed(width, Buffer::Scanline)?;
    let mut out_of_range = 0u64;

    for y in 0..height {
        if y % 16 == 0 {
            stop.check()?;
        }
        let actual = source.read_fill(&mut indices)?;
        if actual < width {
            return Err(RixError::TruncatedScanline {
                row: y as u32,
                expected: width,
                actual,
            });
        }

        let start = raster.len();
        grow_raster(raster, row_bytes, raster_len)?;
        let row = &mut raster[start..];
        for (&index, out) in indices.iter().zip(row.chunks_exact_mut(bpp)) {
            // The palette holds exactly `entry_count` entries.
            match palette.get(usize::from(index)) {
                Some(rgb) => write_pixel(out, rgb, profile.max_channel_value, depth),
                None => out_of_range += 1,
            }
        }
    }

    Ok(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::{grow_raster, scale_channel};
    use crate::error::{Buffer, ErrorClass, RixError};

    #[test]
    fn two_bit_channels_hit_exact_thirds() {
        let got: [u32; 4] = core::array::from_fn(|raw| scale_channel(raw as u8, 3, 255));
        assert_eq!(got, [0, 85, 170, 255]);
    }

    #[test]
    fn six_bit_channels_round_to_nearest() {
        assert_eq!(scale_channel(0, 63, 255), 0);
        assert_eq!(scale_channel(1, 63, 255), 4); // 4.05
        assert_eq!(scale_channel(31, 63, 255), 125); // 125.48
        assert_eq!(scale_channel(32, 63, 255), 130); // 129.52
        assert_eq!(scale_channel(63, 63, 255), 255);
        assert_eq!(scale_channel(1, 63, 65535), 1040); // 1040.24
        assert_eq!(scale_channel(63, 63, 65535), 65535);
    }

    #[test]
    fn out_of_range_raw_values_saturate() {
        assert_eq!(scale_channel(4, 3, 255), 255);
        assert_eq!(scale_channel(255, 63, 65535), 65535);
    }

    #[test]
    fn zero_max_is_black() {
        assert_eq!(scale_channel(7, 0, 255), 0);
    }

    #[test]
    fn raster_grows_one_row_at_a_time() {
        let mut raster = alloc::vec::Vec::new();
        for rows in 1..=5 {
            grow_raster(&mut raster, 6, 30).unwrap();
            assert_eq!(raster.len(), rows * 6);
            assert!(raster.capacity() <= 30);
        }
        assert!(raster.iter().all(|&b| b == 0));
    }

    #[test]
    fn raster_growth_failure_is_out_of_memory() {
        let mut raster = alloc::vec![0u8; 3];
        let err = grow_raster(&mut raster, usize::MAX - 8, usize::MAX).unwrap_err();
        match err {
            RixError::OutOfMemory { buffer, .. } => assert_eq!(buffer, Buffer::Raster),
            ref other => panic!("expected OutOfMemory, got {other:?}"),
        }
        assert_eq!(err.tag(), "MemoryAllocationFailed");
        assert_eq!(err.class(), ErrorClass::ResourceExhaustion);
        // The raster is untouched by the failed reservation.
        assert_eq!(raster, [0, 0, 0]);
    }
}
