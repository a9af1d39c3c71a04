//! # edit-scripts
//!
//! A library for edit distance, optimal alignment and edit-script analysis of
//! symbol sequences.
//!
//! Two sequences are compared under unit-cost Levenshtein distance. Beyond the
//! distance itself, the crate exposes the scripts that realize it: one optimal
//! alignment, every possible script between two short sequences, and the total
//! probability of all scripts under a stochastic operation model. Localized
//! variations can be replayed onto a backbone to produce alternative sequences.
//!
//! ## Features
//!
//! - **Edit distance**: Full DP table or a two-row variant for long inputs
//! - **Alignment**: Deterministic backtracking with a fixed tie-break order
//! - **Script enumeration**: Every script between two sequences, with limits
//! - **Script mass**: Probability of the target summed over all scripts
//! - **Variations**: Substitutions, insertions and deletions on a backbone
//! - **Simulation**: Random genomes, reads with sequencing errors, substring pairs
//!
//! ## Example
//!
//! ```rust
//! use edit_scripts::{align, distance, enumerate_all_scripts, script_mass, OperationModel};
//!
//! assert_eq!(distance(b"ACGT", b"AGT"), 1);
//!
//! let alignment = align(b"ACGG", b"GG");
//! assert_eq!(alignment.script.to_string(), "DDMM");
//!
//! let scripts = enumerate_all_scripts(b"ACGG", b"GG").unwrap();
//! assert_eq!(scripts.len(), 41);
//!
//! let mass = script_mass(b"ACGG", b"GG", &OperationModel::default());
//! assert!(mass > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Operations, scripts and variations
//! - [`distance`]: Edit distance, alignment and overlap profiles
//! - [`scripts`]: Script enumeration and stochastic scoring
//! - [`variants`]: Applying variations to a backbone
//! - [`simulate`]: Random genomes, reads and substring pairs
//! - [`config`]: JSON engine configuration
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod distance;
pub mod scripts;
pub mod simulate;
pub mod utils;
pub mod variants;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use core::{Edit, Operation, PositionPair, Script, SequenceVariant, Variation};
pub use distance::{align, distance, normalized_distance, Alignment, DistanceMatrix};
pub use scripts::{
    enumerate_all_scripts, script_mass, script_probability, EnumerationLimits, OperationModel,
    ScriptEnumerator,
};
pub use variants::{apply, EditVariantSet};
