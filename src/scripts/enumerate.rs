use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Operation, PositionPair, Script};

/// Default cap on `n + m` for exhaustive enumeration
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 16;

/// Default cap on the number of enumerated scripts
pub const DEFAULT_MAX_SCRIPTS: usize = 1_000_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("Sequences too long for exhaustive enumeration: n + m = {total} exceeds the limit of {limit}")]
    TooLong { total: usize, limit: usize },

    #[error("Enumeration would produce {count} scripts, exceeding the limit of {limit}")]
    TooManyScripts { count: u128, limit: usize },

    #[error("Enumeration would produce more scripts than can be counted (limit {limit})")]
    CountOverflow { limit: usize },
}

/// Guards against the exponential blowup of exhaustive enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationLimits {
    /// Maximum combined length `n + m` of the two sequences
    pub max_total_length: usize,

    /// Maximum number of scripts to produce
    pub max_scripts: usize,
}

impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
            max_scripts: DEFAULT_MAX_SCRIPTS,
        }
    }
}

impl EnumerationLimits {
    /// No limits at all; enumeration may not terminate in practice
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_total_length: usize::MAX,
            max_scripts: usize::MAX,
        }
    }

    /// Check that enumerating scripts between sequences of length `n` and `m`
    /// stays within these limits.
    ///
    /// # Errors
    ///
    /// Returns `EnumerationError::TooLong` if `n + m` exceeds the length cap,
    /// `EnumerationError::TooManyScripts` if the script count exceeds the count cap,
    /// or `EnumerationError::CountOverflow` if the count does not fit in a `u128`.
    pub fn check(&self, n: usize, m: usize) -> Result<u128, EnumerationError> {
        let total = n.saturating_add(m);
        if total > self.max_total_length {
            return Err(EnumerationError::TooLong {
                total,
                limit: self.max_total_length,
            });
        }

        let count = script_count(n, m).ok_or(EnumerationError::CountOverflow {
            limit: self.max_scripts,
        })?;
        if count > self.max_scripts as u128 {
            return Err(EnumerationError::TooManyScripts {
                count,
                limit: self.max_scripts,
            });
        }

        Ok(count)
    }
}

/// Number of scripts between sequences of length `n` and `m` (the Delannoy
/// number `D(n, m)`), or `None` if it overflows a `u128`.
#[must_use]
pub fn script_count(n: usize, m: usize) -> Option<u128> {
    // row[j] = D(i, j), rolled over i
    let mut row = vec![1u128; m + 1];
    for _ in 0..n {
        let mut diagonal = row[0];
        for j in 1..=m {
            let above = row[j];
            row[j] = above.checked_add(row[j - 1])?.checked_add(diagonal)?;
            diagonal = above;
        }
    }
    Some(row[m])
}

/// A complete script produced by the enumerator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EnumeratedScript {
    pub script: Script,

    /// Lattice node the script ends on; always `(n, m)`
    pub end: PositionPair,

    /// Number of non-Match operations
    pub cost: usize,
}

/// Exhaustive enumerator of every script transforming a source into a target
#[derive(Debug, Clone)]
pub struct ScriptEnumerator<'a> {
    source: &'a [u8],
    target: &'a [u8],
    limits: EnumerationLimits,
}

impl<'a> ScriptEnumerator<'a> {
    /// Create an enumerator with the default limits
    #[must_use]
    pub fn new(source: &'a [u8], target: &'a [u8]) -> Self {
        Self {
            source,
            target,
            limits: EnumerationLimits::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Branches available from a partial script sitting at `at`
    fn successors(&self, at: PositionPair) -> Vec<Operation> {
        let n = self.source.len();
        let m = self.target.len();
        match (at.i < n, at.j < m) {
            (true, true) => vec![
                Operation::Insertion,
                Operation::Deletion,
                Operation::diagonal(self.source[at.i], self.target[at.j]),
            ],
            (false, true) => vec![Operation::Insertion],
            (true, false) => vec![Operation::Deletion],
            (false, false) => Vec::new(),
        }
    }

    /// Enumerate every script.
    ///
    /// The order of the result is unspecified; no two scripts are equal.
    ///
    /// # Errors
    ///
    /// Returns an `EnumerationError` if the inputs exceed the configured limits.
    pub fn enumerate(&self) -> Result<Vec<EnumeratedScript>, EnumerationError> {
        let n = self.source.len();
        let m = self.target.len();
        let expected = self.limits.check(n, m)?;
        debug!(n, m, expected, "enumerating edit scripts");

        let terminal = PositionPair::new(n, m);
        // `expected` fits in usize: it is bounded by max_scripts
        let mut complete = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
        let mut worklist = vec![(Script::new(), PositionPair::default())];

        while let Some((partial, at)) = worklist.pop() {
            if at == terminal {
                complete.push(EnumeratedScript {
                    cost: partial.cost(),
                    script: partial,
                    end: at,
                });
                continue;
            }
            for op in self.successors(at) {
                worklist.push((partial.extended(op), at.advance(op)));
            }
        }

        debug!(count = complete.len(), "enumeration finished");
        Ok(complete)
    }
}

/// Enumerate every script transforming `source` into `target` with the default limits
///
/// # Errors
///
/// Returns an `EnumerationError` if the inputs exceed [`EnumerationLimits::default`].
pub fn enumerate_all_scripts(
    source: &[u8],
    target: &[u8],
) -> Result<Vec<EnumeratedScript>, EnumerationError> {
    ScriptEnumerator::new(source, target).enumerate()
}

/// Number of scripts per cost
#[must_use]
pub fn cost_histogram(scripts: &[EnumeratedScript]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for script in scripts {
        *histogram.entry(script.cost).or_insert(0) += 1;
    }
    histogram
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_script_count_is_delannoy() {
        assert_eq!(script_count(0, 0), Some(1));
        assert_eq!(script_count(1, 1), Some(3));
        assert_eq!(script_count(2, 2), Some(13));
        assert_eq!(script_count(4, 2), Some(41));
        assert_eq!(script_count(3, 3), Some(63));
        assert_eq!(script_count(5, 0), Some(1));
        assert_eq!(script_count(200, 200), None);
    }

    #[test]
    fn test_enumerate_acgg_gg() {
        let scripts = enumerate_all_scripts(b"ACGG", b"GG").unwrap();
        assert_eq!(scripts.len(), 41);

        let unique: HashSet<_> = scripts.iter().map(|s| s.script.clone()).collect();
        assert_eq!(unique.len(), scripts.len());

        assert!(scripts.iter().all(|s| s.end == PositionPair::new(4, 2)));

        let histogram = cost_histogram(&scripts);
        let (&min_cost, &optimal) = histogram.iter().next().unwrap();
        assert_eq!(min_cost, 2);
        // two deletions of A and C, then the G pair matched
        assert_eq!(optimal, 1);
        let best: Vec<_> = scripts.iter().filter(|s| s.cost == 2).collect();
        assert_eq!(best[0].script.to_string(), "DDMM");
        assert!(histogram.keys().any(|&c| c > 2));
        assert_eq!(histogram.values().sum::<usize>(), 41);
    }

    #[test]
    fn test_enumerated_scripts_replay() {
        let x = b"ACT";
        let y = b"AGTT";
        for s in enumerate_all_scripts(x, y).unwrap() {
            s.script.replay(x, y).unwrap();
            assert_eq!(s.cost, s.script.cost());
        }
    }

    #[test]
    fn test_enumerate_degenerate_inputs() {
        let scripts = enumerate_all_scripts(b"", b"").unwrap();
        assert_eq!(scripts.len(), 1);
        assert!(scripts[0].script.is_empty());

        let scripts = enumerate_all_scripts(b"", b"ACG").unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].script.to_string(), "III");

        let scripts = enumerate_all_scripts(b"AC", b"").unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].script.to_string(), "DD");
    }

    #[test]
    fn test_limits_reject_long_inputs() {
        let err = ScriptEnumerator::new(b"ACGTACGTAC", b"ACGTACGTAC")
            .enumerate()
            .unwrap_err();
        assert_eq!(
            err,
            EnumerationError::TooLong {
                total: 20,
                limit: DEFAULT_MAX_TOTAL_LENGTH
            }
        );
    }

    #[test]
    fn test_limits_reject_many_scripts() {
        let limits = EnumerationLimits {
            max_total_length: 100,
            max_scripts: 40,
        };
        let err = ScriptEnumerator::new(b"ACGG", b"GG")
            .with_limits(limits)
            .enumerate()
            .unwrap_err();
        assert_eq!(
            err,
            EnumerationError::TooManyScripts {
                count: 41,
                limit: 40
            }
        );
    }

    #[test]
    fn test_limits_deserialize_with_defaults() {
        let limits: EnumerationLimits = serde_json::from_str(r#"{"max_scripts": 10}"#).unwrap();
        assert_eq!(limits.max_scripts, 10);
        assert_eq!(limits.max_total_length, DEFAULT_MAX_TOTAL_LENGTH);
    }
}
