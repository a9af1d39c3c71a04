//! Replaying localized variations onto a backbone sequence.
//!
//! - [`apply`]: materialize one list of [`Variation`](crate::core::Variation)s
//! - [`EditVariantSet`]: a shared backbone with independent named
//!   [`SequenceVariant`](crate::core::SequenceVariant)s
//!
//! ## Replay rules
//!
//! The backbone is walked left to right with a cursor in original coordinates:
//!
//! | Edit          | Output                  | Cursor                 |
//! |---------------|-------------------------|------------------------|
//! | Substitution  | replacement text        | advances by text length|
//! | Insertion     | inserted text           | unchanged              |
//! | Deletion      | nothing                 | advances by length     |
//!
//! Backbone symbols between edits are copied unchanged.
//!
//! Variations must be sorted by position and must not overlap; both are checked
//! before anything is written. At a single position, insertions are applied
//! first (in list order) and at most one substitution or deletion follows, so
//! inserted text always lands before the span being replaced or deleted.
//!
//! ## Example
//!
//! ```rust
//! use edit_scripts::core::Variation;
//! use edit_scripts::variants::apply;
//!
//! let edited = apply(
//!     b"ACGACTACCACACAT",
//!     &[Variation::substitution(0, "TG"), Variation::deletion(5, 2)],
//! )
//! .unwrap();
//! assert_eq!(edited, b"TGGACCCACACAT");
//! ```

pub mod apply;
pub mod set;

pub use apply::{application_order, apply};
pub use set::EditVariantSet;
