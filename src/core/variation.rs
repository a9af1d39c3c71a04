use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::operation::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariationError {
    #[error("Invalid variation '{input}': {reason}")]
    Syntax { input: String, reason: String },

    #[error("Variation {index} at position {position} is empty")]
    Empty { index: usize, position: usize },

    #[error("Variation {index} consumes {length} symbol(s) from position {position}, beyond the backbone length {backbone_len}")]
    OutOfBounds {
        index: usize,
        position: usize,
        length: usize,
        backbone_len: usize,
    },

    #[error("Variation {index} at position {position} comes after position {previous}; variations must be sorted by position")]
    Unsorted {
        index: usize,
        position: usize,
        previous: usize,
    },

    #[error("Variation {index} at position {position} overlaps a previous edit ending at {previous_end}")]
    Overlap {
        index: usize,
        position: usize,
        previous_end: usize,
    },

    #[error("Unknown sequence variant '{0}'")]
    UnknownVariant(String),

    #[error("Sequence variant '{0}' already exists")]
    DuplicateVariant(String),
}

/// The edit carried by a [`Variation`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Edit {
    /// Replace `text.len()` backbone symbols with `text`
    Substitution { text: String },
    /// Insert `text` before the anchor position, consuming nothing
    Insertion { text: String },
    /// Skip `length` backbone symbols
    Deletion { length: usize },
}

/// A single localized edit anchored to an offset of the original backbone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variation {
    /// 0-based offset into the unedited backbone
    pub position: usize,

    #[serde(flatten)]
    pub edit: Edit,
}

impl Variation {
    pub fn substitution(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            edit: Edit::Substitution { text: text.into() },
        }
    }

    pub fn insertion(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            edit: Edit::Insertion { text: text.into() },
        }
    }

    #[must_use]
    pub fn deletion(position: usize, length: usize) -> Self {
        Self {
            position,
            edit: Edit::Deletion { length },
        }
    }

    /// The operation kind this variation represents
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self.edit {
            Edit::Substitution { .. } => Operation::Substitution,
            Edit::Insertion { .. } => Operation::Insertion,
            Edit::Deletion { .. } => Operation::Deletion,
        }
    }

    /// Number of backbone symbols this variation consumes
    #[must_use]
    pub fn consumed(&self) -> usize {
        match &self.edit {
            Edit::Substitution { text } => text.len(),
            Edit::Insertion { .. } => 0,
            Edit::Deletion { length } => *length,
        }
    }

    /// Symbols written to the output in place of the consumed span
    #[must_use]
    pub fn emitted(&self) -> &[u8] {
        match &self.edit {
            Edit::Substitution { text } | Edit::Insertion { text } => text.as_bytes(),
            Edit::Deletion { .. } => &[],
        }
    }

    /// End (exclusive) of the consumed backbone span, or `None` if it does not
    /// fit in a `usize`
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        self.position.checked_add(self.consumed())
    }

    /// A variation that neither consumes nor emits anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.edit {
            Edit::Substitution { text } | Edit::Insertion { text } => text.is_empty(),
            Edit::Deletion { length } => *length == 0,
        }
    }
}

impl std::fmt::Display for Variation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.edit {
            Edit::Substitution { text } => write!(f, "S:{}:{text}", self.position),
            Edit::Insertion { text } => write!(f, "I:{}:{text}", self.position),
            Edit::Deletion { length } => write!(f, "D:{}:{length}", self.position),
        }
    }
}

impl FromStr for Variation {
    type Err = VariationError;

    /// Parse `S:<pos>:<text>`, `I:<pos>:<text>` or `D:<pos>:<length>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = |reason: &str| VariationError::Syntax {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = s.trim().splitn(3, ':');
        let (Some(kind), Some(position), Some(payload)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(syntax("expected <type>:<position>:<payload>"));
        };

        let position: usize = position
            .parse()
            .map_err(|_| syntax("position is not a non-negative integer"))?;

        match kind.to_ascii_uppercase().as_str() {
            "S" => Ok(Self::substitution(position, payload)),
            "I" => Ok(Self::insertion(position, payload)),
            "D" => {
                let length = payload
                    .parse()
                    .map_err(|_| syntax("deletion length is not a non-negative integer"))?;
                Ok(Self::deletion(position, length))
            }
            _ => Err(syntax("type must be one of S, I, D")),
        }
    }
}

/// A named, ordered collection of variations describing one alternative
/// version of the backbone (e.g. one haplotype)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceVariant {
    pub name: String,

    #[serde(default)]
    pub variations: Vec<Variation>,
}

impl SequenceVariant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_variations(mut self, variations: Vec<Variation>) -> Self {
        self.variations = variations;
        self
    }

    #[must_use]
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    pub fn push(&mut self, variation: Variation) {
        self.variations.push(variation);
    }
}

impl FromStr for SequenceVariant {
    type Err = VariationError;

    /// Parse `NAME=VAR,VAR,...` (an empty list after `=` is allowed)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, list)) = s.split_once('=') else {
            return Err(VariationError::Syntax {
                input: s.to_string(),
                reason: "expected NAME=VARIATION[,VARIATION...]".to_string(),
            });
        };

        let variations = list
            .split(',')
            .filter(|v| !v.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Variation>, _>>()?;

        Ok(Self::new(name.trim()).with_variations(variations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variations() {
        assert_eq!(
            "S:0:TG".parse::<Variation>().unwrap(),
            Variation::substitution(0, "TG")
        );
        assert_eq!(
            "i:3:AC".parse::<Variation>().unwrap(),
            Variation::insertion(3, "AC")
        );
        assert_eq!(
            "D:5:2".parse::<Variation>().unwrap(),
            Variation::deletion(5, 2)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("S:0".parse::<Variation>().is_err());
        assert!("X:0:A".parse::<Variation>().is_err());
        assert!("S:-1:A".parse::<Variation>().is_err());
        assert!("D:1:AC".parse::<Variation>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["S:4:ACG", "I:0:T", "D:7:3"] {
            let variation: Variation = text.parse().unwrap();
            assert_eq!(variation.to_string(), text);
        }
    }

    #[test]
    fn test_spans() {
        let sub = Variation::substitution(2, "AC");
        assert_eq!(sub.consumed(), 2);
        assert_eq!(sub.end(), Some(4));
        assert_eq!(sub.emitted(), b"AC");
        assert_eq!(sub.operation(), Operation::Substitution);

        let ins = Variation::insertion(2, "AC");
        assert_eq!(ins.consumed(), 0);
        assert_eq!(ins.end(), Some(2));

        let del = Variation::deletion(2, 3);
        assert_eq!(del.consumed(), 3);
        assert!(del.emitted().is_empty());
        assert!(Variation::deletion(2, 0).is_empty());
        assert_eq!(Variation::deletion(2, usize::MAX).end(), None);
    }

    #[test]
    fn test_parse_sequence_variant() {
        let variant: SequenceVariant = "hap1=S:0:TG,D:5:2".parse().unwrap();
        assert_eq!(variant.name, "hap1");
        assert_eq!(
            variant.variations,
            vec![Variation::substitution(0, "TG"), Variation::deletion(5, 2)]
        );

        let empty: SequenceVariant = "ref=".parse().unwrap();
        assert!(empty.variations.is_empty());

        assert!("no-separator".parse::<SequenceVariant>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Variation::deletion(5, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"position": 5, "type": "deletion", "length": 2})
        );
    }
}
