use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::diagnostic::{DiagnosticSink, IgnoreDiagnostics};
use crate::error::RixError;
use crate::limits::Limits;
use crate::pixel::{OutputDepth, PixelLayout};
use crate::rix::{self, DecodeOptions, PaletteType, Signature};
use crate::stream::{ByteSource, SliceSource};

/// A fully decoded RIX image.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub palette_type: PaletteType,
    /// Pixels whose index had no palette entry. They are left black.
    pub out_of_range_pixels: u64,
}

impl DecodeOutput {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        layout: PixelLayout,
        palette_type: PaletteType,
        out_of_range_pixels: u64,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            layout,
            palette_type,
            out_of_range_pixels,
        }
    }

    /// Access the pixel data, rows top to bottom, no padding.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Channels of the pixel at `(x, y)`, widened to `u16`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u16; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.layout.bytes_per_pixel();
        let start = (y as usize * self.width as usize + x as usize) * bpp;
        let px = self.pixels.get(start..start + bpp)?;
        Some(match self.layout {
            PixelLayout::Rgb8 => [px[0].into(), px[1].into(), px[2].into()],
            PixelLayout::Rgb16 => core::array::from_fn(|c| {
                u16::from_ne_bytes([px[c * 2], px[c * 2 + 1]])
            }),
        })
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`RixError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], RixError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(RixError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, RixError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgVec<P>, RixError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Builder for a single decode.
///
/// ```no_run
/// use zenrix::{DecodeRequest, Limits, OutputDepth, Unstoppable};
///
/// let data: &[u8] = &[]; // your RIX bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_output_depth(OutputDepth::Sixteen)
///     .decode(Unstoppable)?;
/// # Ok::<(), zenrix::RixError>(())
/// ```
#[derive(Debug)]
pub struct DecodeRequest<'a, S> {
    source: S,
    options: DecodeOptions<'a>,
}

impl<'a> DecodeRequest<'a, SliceSource<'a>> {
    /// Decode from an in-memory buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_source(SliceSource::new(data))
    }
}

#[cfg(feature = "std")]
impl<'a, R: std::io::Read> DecodeRequest<'a, crate::stream::IoSource<R>> {
    /// Decode from any reader. Only reads forward; no seeking.
    pub fn from_reader(reader: R) -> Self {
        Self::from_source(crate::stream::IoSource::new(reader))
    }
}

impl<'a, S: ByteSource> DecodeRequest<'a, S> {
    /// Decode from a custom [`ByteSource`].
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.options.limits = Some(limits);
        self
    }

    /// Magic to require at the start of the header. Defaults to [`Signature::RIX`].
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.options.signature = signature;
        self
    }

    pub fn with_output_depth(mut self, depth: OutputDepth) -> Self {
        self.options.depth = depth;
        self
    }

    /// Decode, discarding diagnostics.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, RixError> {
        self.decode_with_sink(stop, &mut IgnoreDiagnostics)
    }

    /// Decode, reporting warnings and the failure (if any) to `sink`.
    pub fn decode_with_sink(
        mut self,
        stop: impl Stop,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<DecodeOutput, RixError> {
        rix::decode(&mut self.source, &self.options, sink, &stop)
    }
}
