//! Edit distance and optimal alignment.
//!
//! - [`DistanceMatrix`]: the full `(n+1) × (m+1)` unit-cost DP table with backtracking
//! - [`distance`]: edit distance using two rolling rows
//! - [`align`]: one optimal [`Alignment`] (script, distance and visited lattice nodes)
//! - [`render_alignment`]: two-row textual rendering of an alignment path
//! - [`overlap_profile`]: normalized distance of every suffix/prefix overlap
//!
//! ## Recurrence
//!
//! ```text
//! D[0][0] = 0,  D[i][0] = i,  D[0][j] = j
//! D[i][j] = min(D[i-1][j] + 1, D[i][j-1] + 1, D[i-1][j-1] + [X[i-1] != Y[j-1]])
//! ```
//!
//! ## Tie-breaking
//!
//! Backtracking prefers the diagonal (Match/Substitution), then Deletion, then
//! Insertion. The order is fixed so that the reported script is reproducible.
//!
//! ## Example
//!
//! ```rust
//! use edit_scripts::distance::{align, distance};
//!
//! assert_eq!(distance(b"ACGG", b"GG"), 2);
//!
//! let alignment = align(b"ACGG", b"GG");
//! assert_eq!(alignment.script.to_string(), "DDMM");
//! assert_eq!(alignment.script.cost(), alignment.distance);
//! ```

pub mod alignment;
pub mod matrix;
pub mod overlap;

pub use alignment::{align, render_alignment, AlignedRows, Alignment, GAP};
pub use matrix::{distance, normalized_distance, DistanceMatrix};
pub use overlap::{overlap_profile, OverlapScore};
