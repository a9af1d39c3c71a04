use serde::{Deserialize, Serialize};

use crate::core::{SequenceVariant, VariationError};
use crate::variants::apply::apply;

/// A read-only backbone with a collection of independent sequence variants.
///
/// Every variant is applied against the original backbone; variants never
/// compose with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditVariantSet {
    backbone: String,

    #[serde(default)]
    variants: Vec<SequenceVariant>,
}

impl EditVariantSet {
    pub fn new(backbone: impl Into<String>) -> Self {
        Self {
            backbone: backbone.into(),
            variants: Vec::new(),
        }
    }

    #[must_use]
    pub fn backbone(&self) -> &[u8] {
        self.backbone.as_bytes()
    }

    #[must_use]
    pub fn variants(&self) -> &[SequenceVariant] {
        &self.variants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Look up a variant by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SequenceVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Append a variant.
    ///
    /// # Errors
    ///
    /// Returns `VariationError::DuplicateVariant` if a variant with the same name
    /// already exists.
    pub fn add_variant(&mut self, variant: SequenceVariant) -> Result<(), VariationError> {
        if self.get(&variant.name).is_some() {
            return Err(VariationError::DuplicateVariant(variant.name));
        }
        self.variants.push(variant);
        Ok(())
    }

    /// Builder form of [`add_variant`](Self::add_variant)
    ///
    /// # Errors
    ///
    /// Returns `VariationError::DuplicateVariant` on a name clash.
    pub fn with_variant(mut self, variant: SequenceVariant) -> Result<Self, VariationError> {
        self.add_variant(variant)?;
        Ok(self)
    }

    /// Materialize the named variant.
    ///
    /// # Errors
    ///
    /// Returns `VariationError::UnknownVariant` if no variant has this name, or the
    /// error produced by [`apply`] for its variation list.
    pub fn materialize(&self, name: &str) -> Result<Vec<u8>, VariationError> {
        let variant = self
            .get(name)
            .ok_or_else(|| VariationError::UnknownVariant(name.to_string()))?;
        apply(self.backbone(), &variant.variations)
    }

    /// Materialize every variant, in insertion order.
    ///
    /// A failing variant does not prevent the others from being materialized.
    pub fn materialize_all(&self) -> Vec<(&str, Result<Vec<u8>, VariationError>)> {
        self.variants
            .iter()
            .map(|v| (v.name.as_str(), apply(self.backbone(), &v.variations)))
            .collect()
    }
}
