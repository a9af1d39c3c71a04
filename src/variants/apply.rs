use tracing::debug;

use crate::core::{Operation, Variation, VariationError};

/// Check `variations` against a backbone of `backbone_len` symbols and return
/// them in application order.
///
/// The list must be sorted by non-decreasing position. Within one position,
/// insertions are moved ahead of the (single) consuming edit; otherwise the
/// list order is kept.
///
/// # Errors
///
/// Returns `VariationError::Empty` for an edit that neither emits nor consumes,
/// `VariationError::OutOfBounds` if a span reaches past the backbone,
/// `VariationError::Unsorted` if positions decrease, or `VariationError::Overlap`
/// if an edit starts inside a span consumed by an earlier one.
pub fn application_order(
    backbone_len: usize,
    variations: &[Variation],
) -> Result<Vec<&Variation>, VariationError> {
    let mut previous = 0;
    let mut ends = Vec::with_capacity(variations.len());
    for (index, variation) in variations.iter().enumerate() {
        if variation.is_empty() {
            return Err(VariationError::Empty {
                index,
                position: variation.position,
            });
        }
        let Some(end) = variation.end().filter(|&end| end <= backbone_len) else {
            return Err(VariationError::OutOfBounds {
                index,
                position: variation.position,
                length: variation.consumed(),
                backbone_len,
            });
        };
        if variation.position < previous {
            return Err(VariationError::Unsorted {
                index,
                position: variation.position,
                previous,
            });
        }
        previous = variation.position;
        ends.push(end);
    }

    let mut order: Vec<(usize, &Variation)> = variations.iter().enumerate().collect();
    // stable: insertions first within a position, list order otherwise
    order.sort_by_key(|(_, v)| (v.position, v.operation() != Operation::Insertion));

    let mut covered_end = 0;
    for &(index, variation) in &order {
        if variation.position < covered_end {
            return Err(VariationError::Overlap {
                index,
                position: variation.position,
                previous_end: covered_end,
            });
        }
        if variation.consumed() > 0 {
            covered_end = ends[index];
        }
    }

    Ok(order.into_iter().map(|(_, v)| v).collect())
}

/// Replay `variations` onto `backbone` and return the edited sequence.
///
/// Positions refer to the original backbone. The backbone itself is never
/// modified.
///
/// # Errors
///
/// Returns a `VariationError` if the list fails [`application_order`].
pub fn apply(backbone: &[u8], variations: &[Variation]) -> Result<Vec<u8>, VariationError> {
    let order = application_order(backbone.len(), variations)?;

    let emitted: usize = order.iter().map(|v| v.emitted().len()).sum();
    let mut edited = Vec::with_capacity(backbone.len() + emitted);
    let mut cursor = 0;

    for variation in order {
        edited.extend_from_slice(&backbone[cursor..variation.position]);
        edited.extend_from_slice(variation.emitted());
        // application_order checked that the span ends inside the backbone
        cursor = variation.position + variation.consumed();
    }
    edited.extend_from_slice(&backbone[cursor..]);

    debug!(
        backbone_len = backbone.len(),
        edited_len = edited.len(),
        variations = variations.len(),
        "applied variations"
    );
    Ok(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKBONE: &[u8] = b"ACGACTACCACACAT";

    #[test]
    fn test_empty_list_is_identity() {
        assert_eq!(apply(BACKBONE, &[]).unwrap(), BACKBONE);
        assert_eq!(apply(b"", &[]).unwrap(), b"");
    }

    #[test]
    fn test_substitution_and_deletion() {
        let edited = apply(
            BACKBONE,
            &[Variation::substitution(0, "TG"), Variation::deletion(5, 2)],
        )
        .unwrap();
        assert_eq!(edited, b"TGGACCCACACAT");
    }

    #[test]
    fn test_insertion_does_not_consume() {
        let edited = apply(b"AAAA", &[Variation::insertion(2, "CC")]).unwrap();
        assert_eq!(edited, b"AACCAA");

        // appending at the very end is allowed
        let edited = apply(b"AAAA", &[Variation::insertion(4, "G")]).unwrap();
        assert_eq!(edited, b"AAAAG");
    }

    #[test]
    fn test_insertion_lands_before_deleted_span() {
        let expected = b"ACTTTCAT".to_vec();
        // either list order gives the same result
        let a = apply(
            b"ACGGCAT",
            &[Variation::insertion(2, "TTT"), Variation::deletion(2, 2)],
        )
        .unwrap();
        let b = apply(
            b"ACGGCAT",
            &[Variation::deletion(2, 2), Variation::insertion(2, "TTT")],
        )
        .unwrap();
        assert_eq!(a, expected);
        assert_eq!(b, expected);
    }

    #[test]
    fn test_insertions_at_same_position_keep_list_order() {
        let edited = apply(
            b"AAAA",
            &[
                Variation::insertion(1, "C"),
                Variation::substitution(1, "T"),
                Variation::insertion(1, "G"),
            ],
        )
        .unwrap();
        assert_eq!(edited, b"ACGTAA");
    }

    #[test]
    fn test_adjacent_spans_are_allowed() {
        let edited = apply(
            b"ACGT",
            &[Variation::deletion(0, 2), Variation::substitution(2, "AA")],
        )
        .unwrap();
        assert_eq!(edited, b"AA");
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        assert!(matches!(
            apply(b"ACGT", &[Variation::deletion(3, 2)]),
            Err(VariationError::OutOfBounds {
                index: 0,
                length: 2,
                ..
            })
        ));
        assert!(matches!(
            apply(b"ACGT", &[Variation::insertion(5, "A")]),
            Err(VariationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_span() {
        assert!(matches!(
            apply(b"ACGT", &[Variation::deletion(2, usize::MAX)]),
            Err(VariationError::OutOfBounds {
                index: 0,
                position: 2,
                length: usize::MAX,
                backbone_len: 4,
            })
        ));

        let huge: Variation = "D:2:18446744073709551615".parse().unwrap();
        assert!(matches!(
            apply(b"ACGT", &[Variation::insertion(0, "T"), huge]),
            Err(VariationError::OutOfBounds { index: 1, .. })
        ));
        assert!(matches!(
            apply(b"ACGT", &[Variation::substitution(usize::MAX, "A")]),
            Err(VariationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = apply(
            BACKBONE,
            &[Variation::deletion(5, 2), Variation::substitution(0, "TG")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            VariationError::Unsorted {
                index: 1,
                position: 0,
                previous: 5
            }
        );
    }

    #[test]
    fn test_rejects_overlap() {
        let err = apply(
            BACKBONE,
            &[Variation::substitution(0, "TGA"), Variation::deletion(2, 2)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            VariationError::Overlap {
                index: 1,
                position: 2,
                previous_end: 3
            }
        );

        // two consuming edits at one position
        assert!(matches!(
            apply(
                BACKBONE,
                &[Variation::substitution(4, "A"), Variation::deletion(4, 1)]
            ),
            Err(VariationError::Overlap { .. })
        ));

        // an insertion inside a deleted span
        assert!(matches!(
            apply(
                BACKBONE,
                &[Variation::deletion(4, 3), Variation::insertion(5, "G")]
            ),
            Err(VariationError::Overlap { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_edits() {
        assert!(matches!(
            apply(BACKBONE, &[Variation::deletion(1, 0)]),
            Err(VariationError::Empty { index: 0, .. })
        ));
        assert!(matches!(
            apply(BACKBONE, &[Variation::insertion(1, "")]),
            Err(VariationError::Empty { .. })
        ));
    }
}
