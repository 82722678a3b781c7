//! Magic-byte signatures.
//!
//! The RIX header reserves four bytes for the magic. Files in the wild carry
//! `RIX3`, and readers have only ever checked the leading `RIX`. Which one a
//! host accepts is a choice, so it is a value rather than a constant buried
//! in the parser.

/// Width of the magic region at the start of the header.
pub const MAGIC_LEN: usize = 4;

/// The magic bytes a RIX stream must start with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    magic: &'static [u8],
}

impl Signature {
    /// 3-byte `RIX` magic; accepts any revision byte. This is the default.
    pub const RIX: Signature = Signature { magic: b"RIX" };

    /// Strict 4-byte `RIX3` magic.
    pub const RIX3: Signature = Signature { magic: b"RIX3" };

    /// Custom signature. Returns `None` unless `magic` is 1 to 4 bytes long.
    pub const fn new(magic: &'static [u8]) -> Option<Self> {
        if magic.is_empty() || magic.len() > MAGIC_LEN {
            None
        } else {
            Some(Self { magic })
        }
    }

    pub const fn bytes(&self) -> &'static [u8] {
        self.magic
    }

    /// Whether `prefix` starts with this signature. Short input never matches.
    pub fn matches(&self, prefix: &[u8]) -> bool {
        prefix.len() >= self.magic.len() && &prefix[..self.magic.len()] == self.magic
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::RIX
    }
}
