//! Region value type.
//!
//! A [`Region`] names a half-open byte range `[position, position + length)`
//! within some byte source, optionally tagged with a name. Regions are what
//! the access journals record and what the coverage reports are made of.

use std::fmt;

/// A half-open byte range `[position, position + length)` with an optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Start offset in bytes from the beginning of the source.
    pub position: u64,

    /// Length of the range in bytes.
    pub length: u64,

    /// Optional name, e.g. a group label or field name.
    pub name: Option<String>,
}

impl Region {
    /// Creates an unnamed region.
    pub fn new(position: u64, length: u64) -> Self {
        Self {
            position,
            length,
            name: None,
        }
    }

    /// Creates a named region.
    pub fn named(position: u64, length: u64, name: impl Into<String>) -> Self {
        Self {
            position,
            length,
            name: Some(name.into()),
        }
    }

    /// End offset of the range (one past the last byte).
    pub fn end(&self) -> u64 {
        self.position + self.length
    }

    /// A zero-length region covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Sort key used to normalize merge input: position, then length.
    ///
    /// This is an input-normalization order only, not a general-purpose
    /// comparator; `Region` deliberately does not implement `Ord`.
    pub(crate) fn sort_key(&self) -> (u64, u64) {
        (self.position, self.length)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(
                f,
                "position: {}, length: {}, name: {}",
                self.position, self.length, name
            ),
            None => write!(f, "position: {}, length: {}", self.position, self.length),
        }
    }
}
