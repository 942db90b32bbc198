//! Coverage engines: region merging and complement computation.
//!
//! Both functions are pure transforms over [`Region`] sequences. [`merge`]
//! coalesces overlapping or exactly-adjacent regions into a minimal covering
//! set; [`complement`] returns the gaps a merged set leaves open within
//! `[0, total_len)`. Together they answer "which bytes were touched" and
//! "which bytes were not".

use crate::region::Region;

/// Coalesces overlapping or adjacent regions into a minimal covering set.
///
/// Input is stable-sorted by `(position, length)` first, so insertion order
/// only matters for name concatenation among ties. Two regions are merged when
/// the next one starts at or before the running end of the current run (exact
/// adjacency counts, a one-byte gap does not).
///
/// Names of coalesced regions are joined in encounter order: each name is
/// split on `,`, tokens are trimmed, empty tokens are dropped, and the rest
/// are joined with `", "`. Identical tokens are kept as-is.
pub fn merge(regions: &[Region]) -> Vec<Region> {
    let mut sorted: Vec<&Region> = regions.iter().collect();
    sorted.sort_by_key(|r| r.sort_key());

    let mut merged = Vec::new();
    let mut run: Option<(u64, u64, Vec<String>)> = None;

    for region in sorted {
        match &mut run {
            Some((_, ending, names)) if region.position <= *ending => {
                push_name_tokens(names, region.name.as_deref());
                *ending = (*ending).max(region.end());
            }
            _ => {
                if let Some(previous) = run.take() {
                    merged.push(finish_run(previous));
                }
                let mut names = Vec::new();
                push_name_tokens(&mut names, region.name.as_deref());
                run = Some((region.position, region.end(), names));
            }
        }
    }

    if let Some(previous) = run {
        merged.push(finish_run(previous));
    }

    merged
}

/// Returns the maximal gaps a merged, position-sorted region set leaves open
/// within `[0, total_len)`.
///
/// An empty input yields the whole range as one gap. Zero-length candidate
/// gaps are discarded. Each gap carries the name of the region immediately
/// preceding it; the gap before the first region is unnamed.
pub fn complement(merged: &[Region], total_len: u64) -> Vec<Region> {
    let mut gaps = Vec::new();
    let mut cursor = 0u64;
    let mut carried_name: Option<&str> = None;

    for region in merged {
        if region.position > cursor {
            gaps.push(gap(cursor, region.position - cursor, carried_name));
        }
        cursor = cursor.max(region.end());
        carried_name = region.name.as_deref();
    }

    if total_len > cursor {
        gaps.push(gap(cursor, total_len - cursor, carried_name));
    }

    gaps
}

fn gap(position: u64, length: u64, name: Option<&str>) -> Region {
    Region {
        position,
        length,
        name: name.map(str::to_owned),
    }
}

fn push_name_tokens(names: &mut Vec<String>, name: Option<&str>) {
    let Some(name) = name else { return };
    for token in name.split(',') {
        let token = token.trim();
        if !token.is_empty() {
            names.push(token.to_owned());
        }
    }
}

fn finish_run((origin, ending, names): (u64, u64, Vec<String>)) -> Region {
    let name = if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    };
    Region {
        position: origin,
        length: ending - origin,
        name,
    }
}
