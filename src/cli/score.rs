//! Score command - probability of the target given the source.
//!
//! Sums the probability of every script transforming the source into the
//! target under an i.i.d. operation model. A single script can also be scored
//! and compared against the total mass.

use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::EngineConfig;
use crate::core::Script;
use crate::distance::align;
use crate::scripts::{script_mass, script_probability, OperationModel};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Source sequence (X)
    #[arg(required = true)]
    pub source: String,

    /// Target sequence (Y)
    #[arg(required = true)]
    pub target: String,

    // === Operation model options ===
    /// Probability of a Match on equal symbols (default 0.85)
    #[arg(long)]
    pub p_match: Option<f64>,

    /// Probability of a Substitution on different symbols (default 0.05)
    #[arg(long)]
    pub p_sub: Option<f64>,

    /// Probability of a Deletion (default 0.05)
    #[arg(long)]
    pub p_del: Option<f64>,

    /// Probability of an Insertion (default 0.05)
    #[arg(long)]
    pub p_ins: Option<f64>,

    /// JSON config file with the operation model
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also score this script, e.g. DDMM.
    /// Defaults to one optimal alignment script.
    #[arg(long)]
    pub script: Option<Script>,
}

impl ScoreArgs {
    /// Config model with command-line overrides applied
    fn model(&self) -> anyhow::Result<OperationModel> {
        let mut model = match &self.config {
            Some(path) => EngineConfig::load_from_file(path)?.model,
            None => OperationModel::default(),
        };
        if let Some(p) = self.p_match {
            model.p_match = p;
        }
        if let Some(p) = self.p_sub {
            model.p_sub = p;
        }
        if let Some(p) = self.p_del {
            model.p_del = p;
        }
        if let Some(p) = self.p_ins {
            model.p_ins = p;
        }
        model.validate()?;
        Ok(model)
    }
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if the model is invalid or the given script does not
/// transform the source into the target.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let model = args.model()?;
    let x = args.source.as_bytes();
    let y = args.target.as_bytes();

    if verbose {
        eprintln!(
            "Operation model: match={} sub={} del={} ins={}",
            model.p_match, model.p_sub, model.p_del, model.p_ins
        );
    }

    let mass = script_mass(x, y, &model);
    let script = match &args.script {
        Some(script) => script.clone(),
        None => align(x, y).script,
    };
    let probability = script_probability(x, y, &script, &model)?;
    let share = if mass > 0.0 { probability / mass } else { 0.0 };

    match format {
        OutputFormat::Text => {
            println!("Script mass");
            println!("{}", "=".repeat(60));
            println!("  Source:      {}", args.source);
            println!("  Target:      {}", args.target);
            println!("  Mass:        {mass:.6e}");
            if mass > 0.0 {
                println!("  log10 mass:  {:.4}", mass.log10());
            }
            println!();
            println!("  Script:      {script}");
            println!("  Probability: {probability:.6e}");
            println!("  Share:       {:.2}%", share * 100.0);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": args.source,
                "target": args.target,
                "model": model,
                "mass": mass,
                "script": script,
                "script_probability": probability,
                "share": share,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("source\ttarget\tmass\tscript\tscript_probability\tshare");
            println!(
                "{}\t{}\t{mass:e}\t{script}\t{probability:e}\t{share:.6}",
                args.source, args.target
            );
        }
    }

    Ok(())
}
