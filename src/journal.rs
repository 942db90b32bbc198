//! Access journal: the per-direction record of touched byte ranges.
//!
//! A [`Journal`] is an append-only, insertion-ordered list of [`Region`]s with
//! an optional one-deep group marker. The log stream keeps two of them, one
//! for reads and one for writes; grouping collapses a run of consecutive
//! entries into a single named region.

use log::debug;

use crate::error::{Error, Result};
use crate::region::Region;

/// Insertion-ordered record of accessed byte ranges for one direction.
#[derive(Debug, Default)]
pub struct Journal {
    regions: Vec<Region>,
    group: Option<Group>,
}

#[derive(Debug)]
struct Group {
    start_index: usize,
    name: Option<String>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the byte range `[start, end)` touched by one primitive access.
    ///
    /// A call with `end <= start` records nothing: only bytes actually
    /// transferred are logged, so a zero-byte access leaves no entry.
    pub fn record(&mut self, start: u64, end: u64) {
        if end > start {
            self.regions.push(Region::new(start, end - start));
        }
    }

    /// Accumulated regions in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Accumulated regions ordered by position.
    pub fn ordered(&self) -> Vec<Region> {
        let mut regions = self.regions.clone();
        regions.sort_by_key(|r| r.sort_key());
        regions
    }

    /// Discards all entries and aborts any active group.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.group = None;
    }

    /// Whether a group is currently active.
    pub fn group_active(&self) -> bool {
        self.group.is_some()
    }

    /// Begins a group: subsequent entries will be collapsed into one region
    /// by [`end_group`](Self::end_group).
    ///
    /// Fails with [`Error::GroupActive`] if a group is already active;
    /// nesting is not supported.
    pub fn begin_group(&mut self, name: Option<&str>) -> Result<()> {
        if self.group.is_some() {
            return Err(Error::GroupActive);
        }
        debug!(
            "begin group {:?} at entry index {}",
            name,
            self.regions.len()
        );
        self.group = Some(Group {
            start_index: self.regions.len(),
            name: name.map(str::to_owned),
        });
        Ok(())
    }

    /// Ends the active group, replacing the entries recorded since
    /// [`begin_group`](Self::begin_group) with one region spanning them.
    ///
    /// Fails with [`Error::GroupNotActive`] if no group is active, with
    /// [`Error::EmptyGroup`] if nothing was recorded during the group, and
    /// with [`Error::NonContiguous`] if the recorded entries leave a gap.
    /// Overlapping and exactly-adjacent entries are accepted.
    pub fn end_group(&mut self) -> Result<()> {
        let group = self.group.take().ok_or(Error::GroupNotActive)?;

        let slice = &self.regions[group.start_index..];
        let first = slice.first().ok_or(Error::EmptyGroup)?;

        let origin = first.position;
        let mut running_end = first.end();

        for region in &slice[1..] {
            if region.position > running_end {
                return Err(Error::NonContiguous {
                    offset: region.position,
                });
            }
            running_end = running_end.max(region.end());
        }

        debug!(
            "end group {:?}: {} entries collapsed to [{}, {})",
            group.name,
            slice.len(),
            origin,
            running_end
        );

        self.regions.truncate(group.start_index);
        self.regions.push(Region {
            position: origin,
            length: running_end - origin,
            name: group.name,
        });

        Ok(())
    }
}
