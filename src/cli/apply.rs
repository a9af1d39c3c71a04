//! Apply command - materialize variations onto a backbone.
//!
//! Positional variations form a single unnamed variant; `--variant` adds named
//! variants that are each applied to the original backbone independently.

use clap::Args;

use crate::cli::{text, OutputFormat};
use crate::core::{SequenceVariant, Variation, VariationError};
use crate::variants::{application_order, EditVariantSet};

/// Name given to the variant built from positional variations
const DEFAULT_VARIANT: &str = "variant";

/// Arguments for the apply command
#[derive(Args)]
pub struct ApplyArgs {
    /// Backbone sequence
    #[arg(required = true)]
    pub backbone: String,

    /// Variations such as S:0:TG, I:3:TTT or D:5:2 (offsets into the backbone)
    pub variations: Vec<Variation>,

    /// Named variant, e.g. hap1=S:0:TG,D:5:2 (repeatable)
    #[arg(long = "variant", value_name = "NAME=VARIATIONS")]
    pub variants: Vec<SequenceVariant>,
}

impl ApplyArgs {
    fn variant_set(&self) -> Result<EditVariantSet, VariationError> {
        let mut set = EditVariantSet::new(self.backbone.clone());
        if !self.variations.is_empty() || self.variants.is_empty() {
            set.add_variant(
                SequenceVariant::new(DEFAULT_VARIANT).with_variations(self.variations.clone()),
            )?;
        }
        for variant in &self.variants {
            set.add_variant(variant.clone())?;
        }
        Ok(set)
    }
}

/// Execute the apply command
///
/// # Errors
///
/// Returns an error if a variant name is repeated or any variant fails to
/// apply. Variants that do apply are still printed.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ApplyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let set = args.variant_set()?;

    if verbose {
        eprintln!(
            "Backbone of {} symbols, {} variant(s)",
            set.backbone().len(),
            set.len()
        );
        for variant in set.variants() {
            if let Ok(order) = application_order(set.backbone().len(), &variant.variations) {
                let order: Vec<String> = order.iter().map(ToString::to_string).collect();
                eprintln!("  {}: {}", variant.name, order.join(" "));
            }
        }
    }

    let results = set.materialize_all();
    let mut failures = Vec::new();

    match format {
        OutputFormat::Text => {
            for (name, result) in &results {
                match result {
                    Ok(sequence) if results.len() == 1 => println!("{}", text(sequence)),
                    Ok(sequence) => println!("{name}\t{}", text(sequence)),
                    Err(e) => failures.push(format!("{name}: {e}")),
                }
            }
        }
        OutputFormat::Json => {
            let mut variants = Vec::new();
            for (name, result) in &results {
                match result {
                    Ok(sequence) => variants.push(serde_json::json!({
                        "name": name,
                        "sequence": text(sequence),
                    })),
                    Err(e) => failures.push(format!("{name}: {e}")),
                }
            }
            let output = serde_json::json!({
                "backbone": args.backbone,
                "variants": variants,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tsequence");
            for (name, result) in &results {
                match result {
                    Ok(sequence) => println!("{name}\t{}", text(sequence)),
                    Err(e) => failures.push(format!("{name}: {e}")),
                }
            }
        }
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("Error: {failure}");
        }
        anyhow::bail!(
            "{} of {} variant(s) could not be applied",
            failures.len(),
            results.len()
        );
    }

    Ok(())
}
