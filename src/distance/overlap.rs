use serde::Serialize;

use crate::distance::matrix::{distance, normalized_distance};

/// Distance between one suffix of the source and the matching prefix of the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapScore {
    /// Start of the source suffix
    pub offset: usize,

    /// Length of the source suffix
    pub source_len: usize,

    /// Length of the target prefix
    pub target_len: usize,

    pub distance: usize,

    /// `distance / (source_len + target_len)`
    pub normalized: f64,
}

/// Score every suffix/prefix overlap of `source` against `target`.
///
/// For each offset `i` in `0..n-1` the suffix `source[i..]` is compared with the
/// prefix `target[..min(n - i, m)]`. Sequences shorter than two symbols have no
/// overlaps.
#[must_use]
pub fn overlap_profile(source: &[u8], target: &[u8]) -> Vec<OverlapScore> {
    let n = source.len();
    (0..n.saturating_sub(1))
        .map(|offset| {
            let suffix = &source[offset..];
            let prefix = &target[..(n - offset).min(target.len())];
            OverlapScore {
                offset,
                source_len: suffix.len(),
                target_len: prefix.len(),
                distance: distance(suffix, prefix),
                normalized: normalized_distance(suffix, prefix),
            }
        })
        .collect()
}
