use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::operation::{Operation, PositionPair};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Invalid script symbol '{symbol}' at index {index} (expected one of M, S, I, D)")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("Operation {index} ({op}) overruns the sequences at {position}")]
    Overrun {
        index: usize,
        op: Operation,
        position: PositionPair,
    },

    #[error("Operation {index} is a Match but the symbols at {position} differ")]
    MatchOnDifferentSymbols { index: usize, position: PositionPair },

    #[error("Operation {index} is a Substitution but the symbols at {position} are equal")]
    SubstitutionOnEqualSymbols { index: usize, position: PositionPair },

    #[error("Script ends at {end} instead of {expected}")]
    Incomplete {
        end: PositionPair,
        expected: PositionPair,
    },
}

/// An ordered list of operations transforming a source sequence into a target.
///
/// Serializes as its textual form (e.g. `"MMSDI"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Script(Vec<Operation>);

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, op: Operation) {
        self.0.push(op);
    }

    /// This script extended by one operation
    #[must_use]
    pub fn extended(&self, op: Operation) -> Self {
        let mut ops = Vec::with_capacity(self.0.len() + 1);
        ops.extend_from_slice(&self.0);
        ops.push(op);
        Self(ops)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.0
    }

    /// Levenshtein cost: number of non-Match operations
    #[must_use]
    pub fn cost(&self) -> usize {
        self.0.iter().filter(|op| op.is_edit()).count()
    }

    /// Number of occurrences of `op`
    #[must_use]
    pub fn count(&self, op: Operation) -> usize {
        self.0.iter().filter(|&&o| o == op).count()
    }

    /// Lattice node reached after the whole script, ignoring symbol content
    #[must_use]
    pub fn consumption(&self) -> PositionPair {
        self.iter().fold(PositionPair::default(), PositionPair::advance)
    }

    /// Replay the script on `source`/`target`, checking every step.
    ///
    /// Returns the visited lattice nodes (one per operation, `(0,0)` excluded).
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Overrun` if a step consumes past the end of a sequence,
    /// `ScriptError::MatchOnDifferentSymbols`/`SubstitutionOnEqualSymbols` if a
    /// diagonal step disagrees with the symbols, or `ScriptError::Incomplete` if the
    /// script does not end at `(n, m)`.
    pub fn replay(&self, source: &[u8], target: &[u8]) -> Result<Vec<PositionPair>, ScriptError> {
        let mut position = PositionPair::default();
        let mut visited = Vec::with_capacity(self.len());

        for (index, op) in self.iter().enumerate() {
            let next = position.advance(op);
            if next.i > source.len() || next.j > target.len() {
                return Err(ScriptError::Overrun {
                    index,
                    op,
                    position,
                });
            }

            match op {
                Operation::Match if source[position.i] != target[position.j] => {
                    return Err(ScriptError::MatchOnDifferentSymbols { index, position });
                }
                Operation::Substitution if source[position.i] == target[position.j] => {
                    return Err(ScriptError::SubstitutionOnEqualSymbols { index, position });
                }
                _ => {}
            }

            visited.push(next);
            position = next;
        }

        let expected = PositionPair::new(source.len(), target.len());
        if position != expected {
            return Err(ScriptError::Incomplete {
                end: position,
                expected,
            });
        }

        Ok(visited)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for op in &self.0 {
            write!(f, "{}", op.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                Operation::from_symbol(symbol).ok_or(ScriptError::InvalidSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<Operation>> for Script {
    fn from(ops: Vec<Operation>) -> Self {
        Self(ops)
    }
}

impl FromIterator<Operation> for Script {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Script> for String {
    fn from(script: Script) -> Self {
        script.to_string()
    }
}

impl TryFrom<String> for Script {
    type Error = ScriptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let script: Script = "MSDI".parse().unwrap();
        assert_eq!(
            script.operations(),
            &[
                Operation::Match,
                Operation::Substitution,
                Operation::Deletion,
                Operation::Insertion
            ]
        );
        assert_eq!(script.to_string(), "MSDI");
        assert_eq!(script.cost(), 3);
        assert_eq!(script.count(Operation::Deletion), 1);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "MMXD".parse::<Script>().unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidSymbol {
                symbol: 'X',
                index: 2
            }
        );
    }

    #[test]
    fn test_replay_valid_script() {
        let script: Script = "DDMM".parse().unwrap();
        let visited = script.replay(b"ACGG", b"GG").unwrap();
        assert_eq!(visited.len(), 4);
        assert_eq!(visited.last(), Some(&PositionPair::new(4, 2)));
    }

    #[test]
    fn test_replay_detects_overrun() {
        let script: Script = "MMM".parse().unwrap();
        let err = script.replay(b"AA", b"AAA").unwrap_err();
        assert!(matches!(err, ScriptError::Overrun { index: 2, .. }));
    }

    #[test]
    fn test_replay_detects_symbol_disagreement() {
        let script: Script = "M".parse().unwrap();
        assert!(matches!(
            script.replay(b"A", b"C"),
            Err(ScriptError::MatchOnDifferentSymbols { index: 0, .. })
        ));

        let script: Script = "S".parse().unwrap();
        assert!(matches!(
            script.replay(b"A", b"A"),
            Err(ScriptError::SubstitutionOnEqualSymbols { index: 0, .. })
        ));
    }

    #[test]
    fn test_replay_detects_incomplete() {
        let script: Script = "M".parse().unwrap();
        assert!(matches!(
            script.replay(b"AC", b"A"),
            Err(ScriptError::Incomplete { .. })
        ));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let script: Script = "MID".parse().unwrap();
        let json = serde_json::to_string(&script).unwrap();
        assert_eq!(json, "\"MID\"");
        let back: Script = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
        assert!(serde_json::from_str::<Script>("\"MQ\"").is_err());
    }

    #[test]
    fn test_consumption() {
        let script: Script = "MSIID".parse().unwrap();
        assert_eq!(script.consumption(), PositionPair::new(3, 4));
        assert_eq!(Script::new().consumption(), PositionPair::default());
    }

    #[test]
    fn test_scripts_are_ordered() {
        let mut scripts: Vec<Script> = ["DDMM", "MM", "DM", "MMDD", "DDMM"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        scripts.sort();
        scripts.dedup();

        // Match < Substitution < Insertion < Deletion, then shorter first
        let sorted: Vec<String> = scripts.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, ["MM", "MMDD", "DM", "DDMM"]);

        let set: std::collections::BTreeSet<Script> = scripts.into_iter().collect();
        assert_eq!(set.len(), 4);
        assert!(Operation::Match < Operation::Deletion);
    }
}
