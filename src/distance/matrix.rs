use tracing::debug;

use crate::core::{Operation, PositionPair, Script};

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Unit-cost edit distance table between a source and a target
#[derive(Debug, Clone)]
pub struct DistanceMatrix<'a> {
    source: &'a [u8],
    target: &'a [u8],
    /// Row-major `(n+1) × (m+1)` cells
    cells: Vec<usize>,
}

impl<'a> DistanceMatrix<'a> {
    /// Fill the full DP table
    #[must_use]
    pub fn compute(source: &'a [u8], target: &'a [u8]) -> Self {
        let n = source.len();
        let m = target.len();
        let cols = m + 1;
        debug!(rows = n + 1, cols, "filling edit distance matrix");

        let mut cells = vec![0usize; (n + 1) * cols];
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }

        for i in 1..=n {
            cells[i * cols] = i;
            for j in 1..=m {
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let diagonal =
                    cells[(i - 1) * cols + j - 1] + usize::from(source[i - 1] != target[j - 1]);
                cells[i * cols + j] = diagonal.min(deletion).min(insertion);
            }
        }

        Self {
            source,
            target,
            cells,
        }
    }

    #[must_use]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    #[must_use]
    pub fn target(&self) -> &'a [u8] {
        self.target
    }

    /// `D[i][j]`, the distance between `source[..i]` and `target[..j]`
    ///
    /// # Panics
    ///
    /// Panics if `i > n` or `j > m`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(
            i <= self.source.len() && j <= self.target.len(),
            "cell ({i},{j}) outside a {}x{} matrix",
            self.source.len() + 1,
            self.target.len() + 1
        );
        self.cells[i * (self.target.len() + 1) + j]
    }

    /// `D[n][m]`
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.source.len(), self.target.len())
    }

    /// The predecessor step used to reach `(i, j)` on an optimal path.
    ///
    /// Ties are broken diagonal first, then Deletion, then Insertion.
    fn step_into(&self, i: usize, j: usize) -> Operation {
        let here = self.get(i, j);
        if i > 0 && j > 0 {
            let op = Operation::diagonal(self.source[i - 1], self.target[j - 1]);
            if self.get(i - 1, j - 1) + usize::from(op.is_edit()) == here {
                return op;
            }
        }
        if i > 0 && self.get(i - 1, j) + 1 == here {
            return Operation::Deletion;
        }
        Operation::Insertion
    }

    /// Reconstruct one optimal script and the lattice nodes it visits.
    ///
    /// The path lists one node per operation in left-to-right order; `(0,0)` is
    /// not included.
    #[must_use]
    pub fn backtrack(&self) -> (Script, Vec<PositionPair>) {
        let mut i = self.source.len();
        let mut j = self.target.len();
        let mut ops = Vec::with_capacity(i + j);
        let mut path = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            path.push(PositionPair::new(i, j));
            let op = self.step_into(i, j);
            let (di, dj) = op.consumption();
            i -= di;
            j -= dj;
            ops.push(op);
        }

        ops.reverse();
        path.reverse();
        (Script::from(ops), path)
    }
}

/// Unit-cost edit distance between `source` and `target`.
///
/// Uses two rolling rows, so memory is `O(m)`.
#[must_use]
pub fn distance(source: &[u8], target: &[u8]) -> usize {
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0usize; target.len() + 1];

    for (i, &x) in source.iter().enumerate() {
        current[0] = i + 1;
        for (j, &y) in target.iter().enumerate() {
            current[j + 1] = (previous[j] + usize::from(x != y))
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}

/// Edit distance divided by the combined length of both sequences.
///
/// Returns 0.0 when both sequences are empty.
#[must_use]
pub fn normalized_distance(source: &[u8], target: &[u8]) -> f64 {
    let total = source.len() + target.len();
    if total == 0 {
        return 0.0;
    }
    count_to_f64(distance(source, target)) / count_to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_rows() {
        let matrix = DistanceMatrix::compute(b"ACG", b"AC");
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(3, 0), 3);
        assert_eq!(matrix.get(0, 2), 2);
        assert_eq!(matrix.distance(), 1);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(distance(b"ACGG", b"GG"), 2);
        assert_eq!(distance(b"kitten", b"sitting"), 3);
        assert_eq!(distance(b"", b"ACGT"), 4);
        assert_eq!(distance(b"ACGT", b""), 4);
        assert_eq!(distance(b"", b""), 0);
        assert_eq!(distance(b"ACGT", b"TGCA"), 4);
    }

    #[test]
    fn test_rolling_rows_agree_with_full_matrix() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"AGCTACCGTGAACTGGT", b"TACCGTAAAGCTAATTGTAA"),
            (b"ACTA", b"ACTA"),
            (b"A", b"TTTT"),
            (b"GATTACA", b"GCATGCU"),
        ];
        for (x, y) in pairs {
            assert_eq!(distance(x, y), DistanceMatrix::compute(x, y).distance());
        }
    }

    #[test]
    fn test_backtrack_prefers_diagonal_then_deletion() {
        // GG stays on the diagonal, the leading AC is deleted
        let (script, path) = DistanceMatrix::compute(b"ACGG", b"GG").backtrack();
        assert_eq!(script.to_string(), "DDMM");
        assert_eq!(
            path,
            vec![
                PositionPair::new(1, 0),
                PositionPair::new(2, 0),
                PositionPair::new(3, 1),
                PositionPair::new(4, 2),
            ]
        );
    }

    #[test]
    fn test_backtrack_empty_inputs() {
        let (script, path) = DistanceMatrix::compute(b"", b"AC").backtrack();
        assert_eq!(script.to_string(), "II");
        assert_eq!(path.len(), 2);

        let (script, _) = DistanceMatrix::compute(b"AC", b"").backtrack();
        assert_eq!(script.to_string(), "DD");

        let (script, path) = DistanceMatrix::compute(b"", b"").backtrack();
        assert!(script.is_empty());
        assert!(path.is_empty());
    }

    #[test]
    fn test_normalized_distance() {
        assert!((normalized_distance(b"ACGG", b"GG") - 2.0 / 6.0).abs() < 1e-12);
        assert!(normalized_distance(b"", b"").abs() < f64::EPSILON);
    }
}
