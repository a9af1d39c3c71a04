//! Exhaustive script enumeration and stochastic script scoring.
//!
//! Both engines walk the same lattice: from `(0,0)` to `(n,m)` with the three
//! steps Insertion `(0,1)`, Deletion `(1,0)` and Match/Substitution `(1,1)`.
//!
//! - [`ScriptEnumerator`] materializes every path as a [`Script`](crate::core::Script).
//!   The number of paths is the Delannoy number `D(n, m)` ([`script_count`]),
//!   which grows exponentially, so enumeration is guarded by [`EnumerationLimits`].
//! - [`script_mass`] sums, without materializing them, the probability of every
//!   path under an i.i.d. [`OperationModel`].
//!
//! For short inputs the two agree: summing [`script_probability`] over the
//! enumerated scripts gives [`script_mass`].
//!
//! ## Example
//!
//! ```rust
//! use edit_scripts::scripts::{enumerate_all_scripts, script_mass, OperationModel};
//!
//! let scripts = enumerate_all_scripts(b"ACGG", b"GG").unwrap();
//! assert_eq!(scripts.len(), 41);
//! assert_eq!(scripts.iter().map(|s| s.cost).min(), Some(2));
//!
//! let mass = script_mass(b"ACTA", b"ACTA", &OperationModel::new(0.6, 0.2, 0.1, 0.1));
//! assert!(mass > 0.6_f64.powi(4));
//! ```

pub mod enumerate;
pub mod scoring;

pub use enumerate::{
    cost_histogram, enumerate_all_scripts, script_count, EnumeratedScript, EnumerationError,
    EnumerationLimits, ScriptEnumerator,
};
pub use scoring::{script_mass, script_probability, OperationModel};
