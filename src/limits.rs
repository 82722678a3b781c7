use crate::error::RixError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). RIX dimensions are 16-bit, so the
/// largest possible raster is 65535x65535; set limits when decoding
/// untrusted files.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the output raster allocation.
    pub max_memory_bytes: Option<u64>,
}

fn ensure_within(what: &str, value: u64, limit: Option<u64>) -> Result<(), RixError> {
    match limit {
        Some(max) if value > max => Err(RixError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check header dimensions against the width, height and pixel-count limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), RixError> {
        ensure_within("width", u64::from(width), self.max_width)?;
        ensure_within("height", u64::from(height), self.max_height)?;
        ensure_within(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check the output raster size against the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), RixError> {
        ensure_within("raster size in bytes", bytes as u64, self.max_memory_bytes)
    }
}
