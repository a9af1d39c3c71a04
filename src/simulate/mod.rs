//! Random sequence generation for experiments with the edit-script engines.
//!
//! Nothing in this module is needed by the engines themselves; it produces the
//! in-memory sequences they consume. Every generator takes the random number
//! generator as a parameter so that runs can be reproduced with a seeded
//! [`StdRng`](rand::rngs::StdRng).
//!
//! - [`random_genome`]: i.i.d. bases drawn from a [`BaseComposition`]
//! - [`mutate`]: apply random edits following an [`ErrorProfile`], returning the script used
//! - [`sample_reads`]: circular read sampling with sequencing errors
//! - [`sample_pairs`]: random substring pairs with their edit distance
//! - [`kmer_counts`]: k-mer composition of a sequence

pub mod composition;
pub mod genome;
pub mod pairs;
pub mod reads;

use rand::distributions::WeightedError;
use thiserror::Error;

use crate::utils::validation::ValidationError;

pub use composition::kmer_counts;
pub use genome::{random_genome, BaseComposition};
pub use pairs::{sample_pairs, SampledPair};
pub use reads::{mutate, sample_reads, ErrorProfile, SimulatedRead};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid weights: {0}")]
    Weights(#[from] WeightedError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid error profile: {0}")]
    Profile(String),

    #[error("Genome of length {genome_len} is too short: {needed} symbols required")]
    GenomeTooShort { genome_len: usize, needed: usize },
}
