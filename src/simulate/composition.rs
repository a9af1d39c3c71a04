use std::collections::BTreeMap;

/// Count every k-mer of `sequence`. Returns an empty map for `k == 0` or when
/// the sequence is shorter than `k`.
#[must_use]
pub fn kmer_counts(sequence: &[u8], k: usize) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    if k == 0 {
        return counts;
    }
    for window in sequence.windows(k) {
        *counts
            .entry(String::from_utf8_lossy(window).into_owned())
            .or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_counts() {
        let counts = kmer_counts(b"AACGTT", 1);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("C"), Some(&1));
        assert_eq!(counts.get("T"), Some(&2));
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_dimers() {
        let counts = kmer_counts(b"ACACA", 2);
        assert_eq!(counts.get("AC"), Some(&2));
        assert_eq!(counts.get("CA"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_degenerate_k() {
        assert!(kmer_counts(b"ACGT", 0).is_empty());
        assert!(kmer_counts(b"ACGT", 5).is_empty());
    }
}
