use serde::Serialize;

use crate::core::{PositionPair, Script};
use crate::distance::matrix::DistanceMatrix;

/// Symbol rendered in a row that does not advance in an aligned column
pub const GAP: char = '-';

/// One optimal alignment between a source and a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// Optimal script (left to right)
    pub script: Script,

    /// Edit distance; always equal to `script.cost()`
    pub distance: usize,

    /// Lattice nodes visited by the script, one per aligned column
    pub path: Vec<PositionPair>,
}

impl Alignment {
    /// Render the alignment as two rows using [`GAP`]
    #[must_use]
    pub fn rows(&self, source: &[u8], target: &[u8]) -> AlignedRows {
        render_alignment(source, target, &self.path, GAP)
    }
}

/// Compute one optimal alignment of `source` against `target`
#[must_use]
pub fn align(source: &[u8], target: &[u8]) -> Alignment {
    let matrix = DistanceMatrix::compute(source, target);
    let (script, path) = matrix.backtrack();
    Alignment {
        script,
        distance: matrix.distance(),
        path,
    }
}

/// Two equal-length rows of an alignment rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRows {
    pub source: String,
    pub target: String,
}

/// Render a path of lattice nodes as two aligned rows.
///
/// Each node is one column. When `i` advanced since the previous node the column
/// shows `source[i-1]`, otherwise `gap`; the target row is built the same way
/// from `j`. The path is expected to start right after `(0,0)`.
///
/// Each symbol is one byte and becomes one `char`, so multi-byte UTF-8 input is
/// rendered byte by byte.
#[must_use]
pub fn render_alignment(
    source: &[u8],
    target: &[u8],
    path: &[PositionPair],
    gap: char,
) -> AlignedRows {
    let mut source_row = String::with_capacity(path.len());
    let mut target_row = String::with_capacity(path.len());
    let mut previous = PositionPair::default();

    for &node in path {
        source_row.push(if node.i > previous.i {
            char::from(source[node.i - 1])
        } else {
            gap
        });
        target_row.push(if node.j > previous.j {
            char::from(target[node.j - 1])
        } else {
            gap
        });
        previous = node;
    }

    AlignedRows {
        source: source_row,
        target: target_row,
    }
}
