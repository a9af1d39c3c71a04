use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Operation, Script, ScriptError};
use crate::utils::validation::{validate_probability, ValidationError};

/// Tolerance used when checking that a model's probabilities sum to one
const SUM_TOLERANCE: f64 = 1e-6;

/// I.i.d. per-operation probabilities.
///
/// `p_match` applies only to equal symbols and `p_sub` only to different ones;
/// `p_sub` stands for all substitutions combined. The scorer does not normalize
/// or clamp these values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationModel {
    pub p_match: f64,
    pub p_sub: f64,
    pub p_del: f64,
    pub p_ins: f64,
}

impl Default for OperationModel {
    fn default() -> Self {
        Self {
            p_match: 0.85,
            p_sub: 0.05,
            p_del: 0.05,
            p_ins: 0.05,
        }
    }
}

impl OperationModel {
    #[must_use]
    pub const fn new(p_match: f64, p_sub: f64, p_del: f64, p_ins: f64) -> Self {
        Self {
            p_match,
            p_sub,
            p_del,
            p_ins,
        }
    }

    /// The same probability for every operation
    #[must_use]
    pub const fn uniform(p: f64) -> Self {
        Self::new(p, p, p, p)
    }

    /// Probability of a single operation
    #[must_use]
    pub const fn probability(&self, op: Operation) -> f64 {
        match op {
            Operation::Match => self.p_match,
            Operation::Substitution => self.p_sub,
            Operation::Deletion => self.p_del,
            Operation::Insertion => self.p_ins,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.p_match + self.p_sub + self.p_del + self.p_ins
    }

    /// Check that every probability is finite and non-negative.
    ///
    /// A model whose probabilities do not sum to one is accepted with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidProbability` naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_probability("p_match", self.p_match)?;
        validate_probability("p_sub", self.p_sub)?;
        validate_probability("p_del", self.p_del)?;
        validate_probability("p_ins", self.p_ins)?;

        let total = self.total();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            warn!(total, "operation probabilities do not sum to 1");
        }
        Ok(())
    }
}

/// Total probability of generating `target` from `source`, summed over every
/// script, under `model`.
///
/// ```text
/// P[0][0] = 1,  P[i][0] = P[i-1][0]·p_del,  P[0][j] = P[0][j-1]·p_ins
/// P[i][j] = P[i-1][j]·p_del + P[i][j-1]·p_ins + P[i-1][j-1]·(p_match | p_sub)
/// ```
#[must_use]
pub fn script_mass(source: &[u8], target: &[u8], model: &OperationModel) -> f64 {
    debug!(
        n = source.len(),
        m = target.len(),
        "computing script mass"
    );

    // previous[j] = P[i-1][j], current[j] = P[i][j]
    let mut previous = vec![1.0f64; target.len() + 1];
    for j in 1..=target.len() {
        previous[j] = previous[j - 1] * model.p_ins;
    }
    let mut current = vec![0.0f64; target.len() + 1];

    for &x in source {
        current[0] = previous[0] * model.p_del;
        for (j, &y) in target.iter().enumerate() {
            let diagonal = model.probability(Operation::diagonal(x, y));
            current[j + 1] = previous[j + 1] * model.p_del
                + current[j] * model.p_ins
                + previous[j] * diagonal;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}

/// Probability of one specific script under `model`.
///
/// # Errors
///
/// Returns a `ScriptError` if `script` does not transform `source` into `target`.
pub fn script_probability(
    source: &[u8],
    target: &[u8],
    script: &Script,
    model: &OperationModel,
) -> Result<f64, ScriptError> {
    script.replay(source, target)?;
    Ok(script.iter().map(|op| model.probability(op)).product())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_boundaries() {
        let model = OperationModel::new(0.7, 0.1, 0.1, 0.1);
        assert!(close(script_mass(b"", b"", &model), 1.0));
        assert!(close(script_mass(b"AC", b"", &model), 0.01));
        assert!(close(script_mass(b"", b"ACG", &model), 0.001));
    }

    #[test]
    fn test_single_symbol() {
        let model = OperationModel::new(0.6, 0.2, 0.1, 0.1);
        // Match, or Deletion+Insertion in either order
        let expected = 0.6 + 2.0 * 0.1 * 0.1;
        assert!(close(script_mass(b"A", b"A", &model), expected));
        let expected = 0.2 + 2.0 * 0.1 * 0.1;
        assert!(close(script_mass(b"A", b"C", &model), expected));
    }

    #[test]
    fn test_identical_sequences_exceed_all_match_term() {
        let model = OperationModel::new(0.6, 0.2, 0.1, 0.1);
        let mass = script_mass(b"ACTA", b"ACTA", &model);
        let all_match = 0.6f64.powi(4);
        assert!(close(all_match, 0.1296));
        assert!(mass > all_match);
    }

    #[test]
    fn test_zero_probabilities_prune_paths() {
        let model = OperationModel::new(1.0, 0.0, 0.0, 0.0);
        assert!(close(script_mass(b"ACGT", b"ACGT", &model), 1.0));
        assert!(close(script_mass(b"ACGT", b"ACGA", &model), 0.0));
        assert!(close(script_mass(b"ACGT", b"ACG", &model), 0.0));
    }

    #[test]
    fn test_script_probability() {
        let model = OperationModel::new(0.6, 0.2, 0.1, 0.1);
        let script: Script = "MSDI".parse().unwrap();
        let p = script_probability(b"ACG", b"AGT", &script, &model).unwrap();
        assert!(close(p, 0.6 * 0.2 * 0.1 * 0.1));

        let bad: Script = "MM".parse().unwrap();
        assert!(script_probability(b"ACG", b"AGT", &bad, &model).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(OperationModel::default().validate().is_ok());
        assert!(OperationModel::uniform(0.25).validate().is_ok());
        // not normalized, still accepted
        assert!(OperationModel::uniform(1.0).validate().is_ok());
        assert!(OperationModel::new(0.9, -0.1, 0.1, 0.1).validate().is_err());
        assert!(OperationModel::new(f64::NAN, 0.1, 0.1, 0.1).validate().is_err());
    }
}
