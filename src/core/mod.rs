//! Core vocabulary shared by every engine in the crate.
//!
//! - [`Operation`]: a single edit step (Match, Substitution, Insertion, Deletion)
//! - [`PositionPair`]: a node `(i, j)` of the DP lattice, i.e. how much of the
//!   source and the target has been consumed
//! - [`Script`]: an ordered list of operations transforming a source into a target
//! - [`Variation`]: a localized edit anchored to a backbone position
//! - [`SequenceVariant`]: a named bundle of variations
//!
//! ## Textual forms
//!
//! | Value      | Example            | Notes                                   |
//! |------------|--------------------|-----------------------------------------|
//! | Script     | `MMSDI`            | one letter per operation                |
//! | Variation  | `S:0:TG`           | substitution of `TG` at offset 0        |
//! | Variation  | `I:3:AC`           | insertion of `AC` before offset 3       |
//! | Variation  | `D:5:2`            | deletion of 2 symbols starting at 5     |

pub mod operation;
pub mod script;
pub mod variation;

pub use operation::{Operation, PositionPair};
pub use script::{Script, ScriptError};
pub use variation::{Edit, SequenceVariant, Variation, VariationError};
