//! The region-tracking log stream.
//!
//! [`LogStream`] wraps any [`ByteSource`] and records which byte ranges each
//! read and write touched, without changing the behavior of the delegated
//! calls in any way. Accesses can be bracketed into named groups, and the
//! accumulated journals are turned into coverage reports on demand: the raw
//! access lists, or the complement — the bytes never read or never written.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use bytelog::{ByteSource, LogStream, Region};
//!
//! let mut stream = LogStream::new(Cursor::new(vec![0u8; 16]));
//! let mut buf = [0u8; 4];
//! stream.read(&mut buf)?;
//!
//! assert_eq!(stream.regions_read(), &[Region::new(0, 4)]);
//! assert_eq!(stream.unread_regions()?, vec![Region::new(4, 12)]);
//! # Ok::<(), bytelog::Error>(())
//! ```

use std::io::{self, SeekFrom};

use log::trace;

use crate::coverage;
use crate::error::Result;
use crate::journal::Journal;
use crate::region::Region;
use crate::source::ByteSource;

/// A byte source that wraps another and logs the regions read and written.
///
/// `LogStream` implements [`ByteSource`] itself, so it can substitute for its
/// inner source transparently or be wrapped again. Tracking is observational:
/// delegated calls keep their results and errors untouched, and a failed call
/// records no region.
///
/// Dropping the stream drops (and thereby closes) an owned source. To leave
/// the source open, wrap `&mut source` instead, or reclaim ownership with
/// [`into_inner`](Self::into_inner).
#[derive(Debug)]
pub struct LogStream<S> {
    source: S,
    reads: Journal,
    writes: Journal,
}

impl<S: ByteSource> LogStream<S> {
    /// Wraps `source`, starting with empty read and write journals.
    pub fn new(source: S) -> Self {
        Self {
            source,
            reads: Journal::new(),
            writes: Journal::new(),
        }
    }

    /// Shared access to the inner source.
    ///
    /// Mutating the inner cursor position other than through this wrapper
    /// invalidates the tracked spans.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Unwraps the stream, returning the inner source without closing it.
    /// Accumulated journals are discarded.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Begins a read group: subsequent reads are collapsed into one named
    /// region by [`end_read_group`](Self::end_read_group).
    pub fn begin_read_group(&mut self, name: Option<&str>) -> Result<()> {
        self.reads.begin_group(name)
    }

    /// Ends the active read group. The reads issued since
    /// [`begin_read_group`](Self::begin_read_group) must be successive or
    /// overlapping and must have transferred at least one byte.
    pub fn end_read_group(&mut self) -> Result<()> {
        self.reads.end_group()
    }

    /// Begins a write group; the write-side mirror of
    /// [`begin_read_group`](Self::begin_read_group).
    pub fn begin_write_group(&mut self, name: Option<&str>) -> Result<()> {
        self.writes.begin_group(name)
    }

    /// Ends the active write group.
    pub fn end_write_group(&mut self) -> Result<()> {
        self.writes.end_group()
    }

    /// Raw read regions in insertion order, ungrouped entries as recorded.
    pub fn regions_read(&self) -> &[Region] {
        self.reads.regions()
    }

    /// Read regions ordered by position.
    pub fn regions_read_ordered(&self) -> Vec<Region> {
        self.reads.ordered()
    }

    /// Raw written regions in insertion order.
    pub fn regions_written(&self) -> &[Region] {
        self.writes.regions()
    }

    /// Written regions ordered by position.
    pub fn regions_written_ordered(&self) -> Vec<Region> {
        self.writes.ordered()
    }

    /// The regions of the source that have not been read yet: the complement
    /// of the merged read set within `[0, len)`.
    pub fn unread_regions(&mut self) -> Result<Vec<Region>> {
        let total_len = self.source.len()?;
        Ok(coverage::complement(
            &coverage::merge(self.reads.regions()),
            total_len,
        ))
    }

    /// The regions of the source that have not been written yet.
    pub fn unwritten_regions(&mut self) -> Result<Vec<Region>> {
        let total_len = self.source.len()?;
        Ok(coverage::complement(
            &coverage::merge(self.writes.regions()),
            total_len,
        ))
    }

    /// Discards the read journal, aborting any active read group.
    pub fn clear_read_log(&mut self) {
        self.reads.clear();
    }

    /// Discards the write journal, aborting any active write group.
    pub fn clear_write_log(&mut self) {
        self.writes.clear();
    }
}

/// Runs one delegated call with the position snapshotted around it, recording
/// the transferred range into `journal` on success. A failed call records
/// nothing; its error is returned as-is.
fn tracked<S: ByteSource, T>(
    source: &mut S,
    journal: &mut Journal,
    direction: &'static str,
    op: impl FnOnce(&mut S) -> io::Result<T>,
) -> io::Result<T> {
    let before = source.position()?;
    let result = op(source);
    if result.is_ok() {
        let after = source.position()?;
        trace!("{direction} span [{before}, {after})");
        journal.record(before, after);
    }
    result
}

impl<S: ByteSource> ByteSource for LogStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        tracked(&mut self.source, &mut self.reads, "read", |source| {
            source.read(buf)
        })
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        tracked(&mut self.source, &mut self.writes, "write", |source| {
            source.write(buf)
        })
    }

    // the remaining operations are pure pass-throughs, never tracked

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.source.seek(pos)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.source.flush()
    }

    fn len(&mut self) -> io::Result<u64> {
        self.source.len()
    }

    fn set_len(&mut self, len: u64) -> io::Result<()> {
        self.source.set_len(len)
    }

    fn position(&mut self) -> io::Result<u64> {
        self.source.position()
    }

    fn set_position(&mut self, pos: u64) -> io::Result<u64> {
        self.source.set_position(pos)
    }
}
