use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{Operation, Script};
use crate::simulate::SimulationError;
use crate::utils::validation::{
    check_alphabet, require_non_empty, validate_probability, DNA_ALPHABET,
};

/// Per-symbol sequencing error rates; the remaining mass is a Match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorProfile {
    pub p_sub: f64,
    pub p_del: f64,
    pub p_ins: f64,
}

impl Default for ErrorProfile {
    fn default() -> Self {
        Self::none()
    }
}

impl ErrorProfile {
    #[must_use]
    pub const fn new(p_sub: f64, p_del: f64, p_ins: f64) -> Self {
        Self {
            p_sub,
            p_del,
            p_ins,
        }
    }

    /// Error-free reads
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Substitutions only
    #[must_use]
    pub const fn hamming() -> Self {
        Self::new(0.1, 0.0, 0.0)
    }

    /// Substitutions, deletions and insertions
    #[must_use]
    pub const fn edit() -> Self {
        Self::new(0.1, 0.05, 0.05)
    }

    #[must_use]
    pub fn p_match(&self) -> f64 {
        1.0 - self.p_sub - self.p_del - self.p_ins
    }

    /// Check the rates form a distribution together with the implied Match rate.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Validation` for a negative or non-finite rate, or
    /// `SimulationError::Profile` if the rates exceed one or insertions are certain.
    pub fn validate(&self) -> Result<(), SimulationError> {
        validate_probability("p_sub", self.p_sub)?;
        validate_probability("p_del", self.p_del)?;
        validate_probability("p_ins", self.p_ins)?;
        if self.p_match() < -1e-12 {
            return Err(SimulationError::Profile(format!(
                "error rates sum to {} (must be at most 1)",
                self.p_sub + self.p_del + self.p_ins
            )));
        }
        if self.p_ins >= 1.0 {
            return Err(SimulationError::Profile(
                "insertion rate must be below 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Operation weights in the order Match, Substitution, Deletion, Insertion
    fn weights(&self) -> [f64; 4] {
        [self.p_match().max(0.0), self.p_sub, self.p_del, self.p_ins]
    }
}

const WEIGHTED_OPERATIONS: [Operation; 4] = [
    Operation::Match,
    Operation::Substitution,
    Operation::Deletion,
    Operation::Insertion,
];

/// A read drawn from a genome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedRead {
    /// Start of the read on the (circular) genome
    pub origin: usize,

    /// Error-free genome window
    #[serde(serialize_with = "as_text")]
    pub template: Vec<u8>,

    /// Read after sequencing errors
    #[serde(serialize_with = "as_text")]
    pub sequence: Vec<u8>,

    /// Script transforming `template` into `sequence`
    pub script: Script,
}

fn as_text<S: serde::Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Apply random sequencing errors to `sequence`.
///
/// Each source symbol is matched, substituted by a different base or deleted;
/// before consuming it, insertions of random bases may occur. Returns the
/// mutated sequence and the script that produced it, which replays on
/// `(sequence, mutated)`.
///
/// # Errors
///
/// Returns a `SimulationError` if `profile` fails [`ErrorProfile::validate`].
pub fn mutate<R: Rng + ?Sized>(
    sequence: &[u8],
    profile: &ErrorProfile,
    rng: &mut R,
) -> Result<(Vec<u8>, Script), SimulationError> {
    profile.validate()?;
    let operations = WeightedIndex::new(&profile.weights())?;

    let mut mutated = Vec::with_capacity(sequence.len());
    let mut script = Script::with_capacity(sequence.len());
    let mut index = 0;

    while index < sequence.len() {
        let symbol = sequence[index];
        let op = WEIGHTED_OPERATIONS[operations.sample(&mut *rng)];
        match op {
            Operation::Match => {
                mutated.push(symbol);
                index += 1;
            }
            Operation::Substitution => {
                mutated.push(substitute(symbol, &mut *rng));
                index += 1;
            }
            Operation::Deletion => index += 1,
            Operation::Insertion => mutated.push(random_base(&mut *rng)),
        }
        script.push(op);
    }

    Ok((mutated, script))
}

fn random_base<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    DNA_ALPHABET[rng.gen_range(0..DNA_ALPHABET.len())]
}

/// A base different from `symbol`
fn substitute<R: Rng + ?Sized>(symbol: u8, rng: &mut R) -> u8 {
    let choices: Vec<u8> = DNA_ALPHABET
        .iter()
        .copied()
        .filter(|&b| b != symbol)
        .collect();
    // DNA_ALPHABET has four bases, so at least three remain
    *choices.choose(rng).unwrap_or(&b'N')
}

/// Sample `count` reads of `length` symbols from a circular `genome` and apply
/// sequencing errors to each.
///
/// # Errors
///
/// Returns `SimulationError::Validation` if the genome is empty or holds a
/// symbol outside `ACGT`, or a profile error.
pub fn sample_reads<R: Rng + ?Sized>(
    genome: &[u8],
    count: usize,
    length: usize,
    profile: &ErrorProfile,
    rng: &mut R,
) -> Result<Vec<SimulatedRead>, SimulationError> {
    require_non_empty("genome", genome)?;
    check_alphabet(genome, DNA_ALPHABET)?;
    profile.validate()?;

    (0..count)
        .map(|_| {
            let origin = rng.gen_range(0..genome.len());
            let template: Vec<u8> = genome
                .iter()
                .cycle()
                .skip(origin)
                .take(length)
                .copied()
                .collect();
            let (sequence, script) = mutate(&template, profile, &mut *rng)?;
            Ok(SimulatedRead {
                origin,
                template,
                sequence,
                script,
            })
        })
        .collect()
}
