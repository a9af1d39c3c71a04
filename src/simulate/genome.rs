use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::simulate::SimulationError;
use crate::utils::validation::{validate_probability, DNA_ALPHABET};

/// Relative weights of the bases `A`, `C`, `G`, `T`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseComposition {
    pub weights: [f64; 4],
}

impl Default for BaseComposition {
    fn default() -> Self {
        Self::uniform()
    }
}

impl BaseComposition {
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            weights: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// 60% G+C
    #[must_use]
    pub const fn gc_rich() -> Self {
        Self {
            weights: [0.2, 0.3, 0.2, 0.3],
        }
    }

    /// 40% G+C
    #[must_use]
    pub const fn gc_poor() -> Self {
        Self {
            weights: [0.3, 0.2, 0.3, 0.2],
        }
    }

    /// Custom weights for `A`, `C`, `G`, `T`; they need not sum to one.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Validation` if a weight is negative or not finite.
    pub fn custom(a: f64, c: f64, g: f64, t: f64) -> Result<Self, SimulationError> {
        for (name, weight) in [("A", a), ("C", c), ("G", g), ("T", t)] {
            validate_probability(name, weight)?;
        }
        Ok(Self {
            weights: [a, c, g, t],
        })
    }

    /// Weights scaled to sum to one
    #[must_use]
    pub fn normalized(&self) -> [f64; 4] {
        let total: f64 = self.weights.iter().sum();
        if total <= 0.0 {
            return self.weights;
        }
        self.weights.map(|w| w / total)
    }
}

impl std::fmt::Display for BaseComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, c, g, t] = self.weights;
        write!(f, "({a},{c},{g},{t})")
    }
}

/// Draw `length` i.i.d. bases from `composition`.
///
/// # Errors
///
/// Returns `SimulationError::Weights` if every weight is zero.
pub fn random_genome<R: Rng + ?Sized>(
    length: usize,
    composition: &BaseComposition,
    rng: &mut R,
) -> Result<Vec<u8>, SimulationError> {
    let bases = WeightedIndex::new(&composition.weights)?;
    Ok((0..length)
        .map(|_| DNA_ALPHABET[bases.sample(&mut *rng)])
        .collect())
}
