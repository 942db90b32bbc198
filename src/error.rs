//! Crate error type.

/// Errors surfaced by the log stream, the group protocol, and the typed
/// readers.
///
/// Group-protocol and argument errors are programming errors and are surfaced
/// immediately; nothing is retried or recovered. I/O errors from the wrapped
/// source pass through unaltered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `begin_group` was called while a group was already active.
    #[error("a group is already active; end it before beginning another")]
    GroupActive,

    /// `end_group` was called with no active group.
    #[error("no group is active")]
    GroupNotActive,

    /// `end_group` was called but no bytes were transferred since
    /// `begin_group`.
    #[error("no data was transferred while the group was active")]
    EmptyGroup,

    /// Accesses recorded inside a group left a gap; only successive or
    /// overlapping accesses may be grouped.
    #[error("group accesses must be successive or overlapping (gap before offset {offset})")]
    NonContiguous {
        /// Start offset of the access that followed the gap.
        offset: u64,
    },

    /// The source ended before an exact-count read could be satisfied.
    #[error("unexpected end of source: needed {needed} bytes, got {got}")]
    UnexpectedEof {
        /// Bytes the caller required.
        needed: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// A malformed argument, e.g. non-ASCII bytes where ASCII was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
