//! Format registry.
//!
//! A host that dispatches between several decoders keeps a [`Registry`] and
//! passes it where it is needed; there is no process-wide table.

use alloc::vec::Vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::diagnostic::DiagnosticSink;
use crate::error::RixError;
use crate::stream::SliceSource;

/// Sniffs a stream prefix. Must not fail; short input returns `false`.
pub type MagicFn = fn(&[u8]) -> bool;

/// Decodes a complete in-memory stream.
pub type DecodeFn =
    fn(&[u8], &mut dyn DiagnosticSink, &dyn Stop) -> Result<DecodeOutput, RixError>;

/// Capabilities a coder advertises to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoderFlags {
    /// Decoder may require a seekable stream.
    pub seekable_stream: bool,
    /// Multiple images may be stored in one stream.
    pub adjoin: bool,
}

/// One registered image format.
#[derive(Clone, Copy, Debug)]
pub struct FormatEntry {
    /// Format identifier, e.g. `"RIX"`.
    pub name: &'static str,
    pub description: &'static str,
    pub flags: CoderFlags,
    pub magic: MagicFn,
    pub decoder: Option<DecodeFn>,
}

impl FormatEntry {
    /// The RIX entry: decode only, single image per stream.
    pub fn rix() -> Self {
        Self {
            name: "RIX",
            description: "ColoRIX VGA Paint Image",
            flags: CoderFlags {
                seekable_stream: true,
                adjoin: false,
            },
            magic: crate::detect,
            decoder: Some(decode_rix),
        }
    }
}

fn decode_rix(
    data: &[u8],
    sink: &mut dyn DiagnosticSink,
    stop: &dyn Stop,
) -> Result<DecodeOutput, RixError> {
    let options = crate::rix::DecodeOptions::default();
    crate::rix::decode(&mut SliceSource::new(data), &options, sink, stop)
}

/// Table of known formats, searched in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<FormatEntry>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every format this crate provides.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FormatEntry::rix());
        registry
    }

    /// Add `entry`, replacing any entry with the same name (ASCII
    /// case-insensitive). Returns the replaced entry.
    pub fn register(&mut self, entry: FormatEntry) -> Option<FormatEntry> {
        match self.position(entry.name) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i], entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// Remove the entry called `name`.
    pub fn unregister(&mut self, name: &str) -> Option<FormatEntry> {
        self.position(name).map(|i| self.entries.remove(i))
    }

    /// Look up an entry by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&FormatEntry> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// First entry whose magic matches `prefix`.
    pub fn detect(&self, prefix: &[u8]) -> Option<&FormatEntry> {
        self.entries.iter().find(|e| (e.magic)(prefix))
    }

    /// Detect the format of `data` and decode it.
    ///
    /// Fails with [`RixError::UnrecognizedFormat`] when no entry with a
    /// decoder claims the data.
    pub fn decode(
        &self,
        data: &[u8],
        sink: &mut dyn DiagnosticSink,
        stop: &dyn Stop,
    ) -> Result<DecodeOutput, RixError> {
        let decoder = self
            .entries
            .iter()
            .filter(|e| (e.magic)(data))
            .find_map(|e| e.decoder)
            .ok_or(RixError::UnrecognizedFormat)?;
        decoder(data, sink, stop)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }
}
