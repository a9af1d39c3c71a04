use rand::Rng;
use serde::Serialize;

use crate::distance::distance;
use crate::simulate::SimulationError;

/// Two substrings of a genome and their edit distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampledPair {
    pub position1: usize,
    pub position2: usize,
    pub distance: usize,
}

/// Sample `count` pairs of `length`-symbol substrings of `genome` and compute
/// their edit distance.
///
/// With `overlap == 0` both substrings start at independent random positions.
/// Otherwise the second one starts `length - overlap` symbols after the first,
/// so consecutive windows share `overlap` symbols.
///
/// # Errors
///
/// Returns `SimulationError::Profile` if `overlap > length`, or
/// `SimulationError::GenomeTooShort` if the genome cannot hold the windows.
pub fn sample_pairs<R: Rng + ?Sized>(
    genome: &[u8],
    length: usize,
    count: usize,
    overlap: usize,
    rng: &mut R,
) -> Result<Vec<SampledPair>, SimulationError> {
    if overlap > length {
        return Err(SimulationError::Profile(format!(
            "overlap {overlap} exceeds the window length {length}"
        )));
    }
    let shift = if overlap > 0 { length - overlap } else { 0 };
    let needed = match length.checked_add(shift) {
        Some(needed) if length > 0 && needed <= genome.len() => needed,
        Some(needed) => {
            return Err(SimulationError::GenomeTooShort {
                genome_len: genome.len(),
                needed: needed.max(1),
            })
        }
        // two windows this long cannot fit in any genome
        None => {
            return Err(SimulationError::GenomeTooShort {
                genome_len: genome.len(),
                needed: usize::MAX,
            })
        }
    };
    let last_start = genome.len() - needed;

    let window = |start: usize| &genome[start..start + length];
    Ok((0..count)
        .map(|_| {
            let position1 = rng.gen_range(0..=last_start);
            let position2 = if overlap > 0 {
                position1 + shift
            } else {
                rng.gen_range(0..=last_start)
            };
            SampledPair {
                position1,
                position2,
                distance: distance(window(position1), window(position2)),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const GENOME: &[u8] = b"ACGTTGCAAGCTTAGGCTAACGTAGCTAGCTAGGATCCA";

    #[test]
    fn test_overlapping_pairs() {
        let mut rng = StdRng::seed_from_u64(2);
        let pairs = sample_pairs(GENOME, 10, 25, 7, &mut rng).unwrap();
        assert_eq!(pairs.len(), 25);
        for pair in pairs {
            assert_eq!(pair.position2, pair.position1 + 3);
            assert!(pair.position2 + 10 <= GENOME.len());
            // a shift of 3 costs at most 3 deletions and 3 insertions
            assert!(pair.distance <= 6);
        }
    }

    #[test]
    fn test_full_overlap_is_identical() {
        let mut rng = StdRng::seed_from_u64(4);
        let pairs = sample_pairs(GENOME, 8, 10, 8, &mut rng).unwrap();
        assert!(pairs.iter().all(|p| p.position1 == p.position2 && p.distance == 0));
    }

    #[test]
    fn test_random_pairs_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        for pair in sample_pairs(GENOME, 12, 100, 0, &mut rng).unwrap() {
            assert!(pair.position1 + 12 <= GENOME.len());
            assert!(pair.position2 + 12 <= GENOME.len());
            assert!(pair.distance <= 12);
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_pairs(b"ACGT", 5, 1, 0, &mut rng),
            Err(SimulationError::GenomeTooShort { .. })
        ));
        assert!(matches!(
            sample_pairs(GENOME, 5, 1, 6, &mut rng),
            Err(SimulationError::Profile(_))
        ));
        assert!(sample_pairs(GENOME, 0, 1, 0, &mut rng).is_err());
    }

    #[test]
    fn test_rejects_huge_windows() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_pairs(GENOME, usize::MAX, 1, 1, &mut rng),
            Err(SimulationError::GenomeTooShort {
                needed: usize::MAX,
                ..
            })
        ));
        assert!(matches!(
            sample_pairs(GENOME, usize::MAX, 1, 0, &mut rng),
            Err(SimulationError::GenomeTooShort { .. })
        ));
    }
}
