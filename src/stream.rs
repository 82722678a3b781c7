//! Byte sources the decoder reads from.
//!
//! The decoder only ever reads forward, so any sequential source works:
//! an in-memory slice ([`SliceSource`]) or, with the `std` feature, any
//! [`std::io::Read`] ([`IoSource`]).

use crate::error::RixError;

/// A sequential source of bytes.
pub trait ByteSource {
    /// Read into `buf` until it is full or the source is exhausted.
    ///
    /// Returns the number of bytes written to `buf`. A short count means the
    /// source has no more data; it is not an error at this level.
    fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize, RixError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize, RixError> {
        (**self).read_fill(buf)
    }
}

/// Forward-only cursor over an in-memory buffer.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize, RixError> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Adapter for any [`std::io::Read`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    fn read_fill(&mut self, buf: &mut [u8]) -> Result<usize, RixError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(RixError::Io(e.into())),
            }
        }
        Ok(filled)
    }
}
