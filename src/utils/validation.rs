//! Centralized validation helpers.

/// Nucleotide alphabet used by the simulators
pub const DNA_ALPHABET: &[u8] = b"ACGT";

/// Validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid probability for {name}: {value} (must be finite and non-negative)")]
    InvalidProbability { name: String, value: f64 },

    #[error("Invalid symbol '{symbol}' at position {position} (allowed: {allowed})")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        allowed: String,
    },

    #[error("Empty sequence provided for {0}")]
    EmptySequence(String),
}

/// Validate that `value` is usable as a probability weight.
///
/// Values above one are accepted; only negative, NaN and infinite values are
/// rejected.
///
/// # Examples
///
/// ```
/// use edit_scripts::utils::validation::validate_probability;
///
/// assert!(validate_probability("p_sub", 0.1).is_ok());
/// assert!(validate_probability("p_sub", -0.1).is_err());
/// assert!(validate_probability("p_sub", f64::INFINITY).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidProbability` if the value is negative or not finite.
pub fn validate_probability(name: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidProbability {
            name: name.to_string(),
            value,
        })
    }
}

/// Check that every symbol of `sequence` belongs to `alphabet`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSymbol` for the first symbol outside the alphabet.
pub fn check_alphabet(sequence: &[u8], alphabet: &[u8]) -> Result<(), ValidationError> {
    match sequence.iter().position(|s| !alphabet.contains(s)) {
        Some(position) => Err(ValidationError::InvalidSymbol {
            symbol: char::from(sequence[position]),
            position,
            allowed: String::from_utf8_lossy(alphabet).into_owned(),
        }),
        None => Ok(()),
    }
}

/// Reject an empty sequence where a non-trivial operation needs symbols.
///
/// # Errors
///
/// Returns `ValidationError::EmptySequence` naming `role`.
pub fn require_non_empty(role: &str, sequence: &[u8]) -> Result<(), ValidationError> {
    if sequence.is_empty() {
        Err(ValidationError::EmptySequence(role.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability("p", 0.0).is_ok());
        assert!(validate_probability("p", 1.0).is_ok());
        assert!(validate_probability("p", 2.5).is_ok());
        assert!(validate_probability("p", -1e-9).is_err());
        assert!(validate_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_check_alphabet() {
        assert!(check_alphabet(b"ACGTTGCA", DNA_ALPHABET).is_ok());
        assert!(check_alphabet(b"", DNA_ALPHABET).is_ok());
        assert_eq!(
            check_alphabet(b"ACNT", DNA_ALPHABET),
            Err(ValidationError::InvalidSymbol {
                symbol: 'N',
                position: 2,
                allowed: "ACGT".to_string()
            })
        );
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("genome", b"A").is_ok());
        assert_eq!(
            require_non_empty("genome", b""),
            Err(ValidationError::EmptySequence("genome".to_string()))
        );
    }
}
