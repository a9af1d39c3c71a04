use serde::{Deserialize, Serialize};

/// A single edit operation of a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Consumes one symbol of each sequence; the symbols are equal
    Match,
    /// Consumes one symbol of each sequence; the symbols differ
    Substitution,
    /// Consumes one symbol of the target only
    Insertion,
    /// Consumes one symbol of the source only
    Deletion,
}

impl Operation {
    /// All operations, in the order of their textual alphabet `M`, `S`, `I`, `D`
    pub const ALL: [Operation; 4] = [
        Operation::Match,
        Operation::Substitution,
        Operation::Insertion,
        Operation::Deletion,
    ];

    /// The diagonal step between two symbols: Match if equal, Substitution otherwise
    #[must_use]
    pub fn diagonal(x: u8, y: u8) -> Self {
        if x == y {
            Self::Match
        } else {
            Self::Substitution
        }
    }

    /// Letter used in the textual script form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'M',
            Self::Substitution => 'S',
            Self::Insertion => 'I',
            Self::Deletion => 'D',
        }
    }

    /// Parse a letter of the textual script form
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'M' => Some(Self::Match),
            'S' => Some(Self::Substitution),
            'I' => Some(Self::Insertion),
            'D' => Some(Self::Deletion),
            _ => None,
        }
    }

    /// Whether this operation counts towards the (unit) cost of a script
    #[must_use]
    pub const fn is_edit(self) -> bool {
        !matches!(self, Self::Match)
    }

    /// Symbols consumed from (source, target)
    #[must_use]
    pub const fn consumption(self) -> (usize, usize) {
        match self {
            Self::Match | Self::Substitution => (1, 1),
            Self::Insertion => (0, 1),
            Self::Deletion => (1, 0),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the DP lattice: `i` symbols of the source and `j` symbols of the
/// target have been consumed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PositionPair {
    pub i: usize,
    pub j: usize,
}

impl PositionPair {
    #[must_use]
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// The lattice node reached after applying `op` from this node
    #[must_use]
    pub const fn advance(self, op: Operation) -> Self {
        let (di, dj) = op.consumption();
        Self {
            i: self.i + di,
            j: self.j + dj,
        }
    }
}

impl std::fmt::Display for PositionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

impl From<(usize, usize)> for PositionPair {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol('X'), None);
        assert_eq!(Operation::from_symbol('m'), None);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(Operation::diagonal(b'A', b'A'), Operation::Match);
        assert_eq!(Operation::diagonal(b'A', b'C'), Operation::Substitution);
    }

    #[test]
    fn test_advance() {
        let start = PositionPair::default();
        assert_eq!(start.advance(Operation::Match), PositionPair::new(1, 1));
        assert_eq!(start.advance(Operation::Insertion), PositionPair::new(0, 1));
        assert_eq!(start.advance(Operation::Deletion), PositionPair::new(1, 0));
        assert_eq!(PositionPair::new(2, 3).to_string(), "(2,3)");
    }

    #[test]
    fn test_only_match_is_free() {
        assert!(!Operation::Match.is_edit());
        assert!(Operation::Substitution.is_edit());
        assert!(Operation::Insertion.is_edit());
        assert!(Operation::Deletion.is_edit());
    }
}
