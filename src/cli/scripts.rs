use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::EngineConfig;
use crate::scripts::{cost_histogram, EnumeratedScript, ScriptEnumerator};

#[derive(Args)]
pub struct ScriptsArgs {
    /// Source sequence (X)
    #[arg(required = true)]
    pub source: String,

    /// Target sequence (Y)
    #[arg(required = true)]
    pub target: String,

    /// Only list scripts with at most this many edits
    #[arg(long)]
    pub max_cost: Option<usize>,

    /// Maximum combined length of the two sequences
    #[arg(long)]
    pub max_total_length: Option<usize>,

    /// Maximum number of scripts to enumerate
    #[arg(long)]
    pub max_scripts: Option<usize>,

    /// JSON config file with enumeration limits
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print only the number of scripts per cost
    #[arg(long)]
    pub summary: bool,
}

/// Execute the scripts command
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the sequences exceed the
/// enumeration limits.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScriptsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };
    let mut limits = config.limits;
    if let Some(max_total_length) = args.max_total_length {
        limits.max_total_length = max_total_length;
    }
    if let Some(max_scripts) = args.max_scripts {
        limits.max_scripts = max_scripts;
    }

    let x = args.source.as_bytes();
    let y = args.target.as_bytes();

    if verbose {
        eprintln!(
            "Enumerating scripts for n={} m={} (limits: n+m <= {}, scripts <= {})",
            x.len(),
            y.len(),
            limits.max_total_length,
            limits.max_scripts
        );
    }

    let mut scripts = ScriptEnumerator::new(x, y).with_limits(limits).enumerate()?;
    let total = scripts.len();
    let histogram = cost_histogram(&scripts);

    if let Some(max_cost) = args.max_cost {
        scripts.retain(|s| s.cost <= max_cost);
    }
    scripts.sort_by(|a, b| {
        a.cost
            .cmp(&b.cost)
            .then_with(|| a.script.to_string().cmp(&b.script.to_string()))
    });

    if verbose {
        eprintln!("Enumerated {total} scripts, listing {}", scripts.len());
    }

    match format {
        OutputFormat::Text => print_text(&scripts, total, &histogram, args.summary),
        OutputFormat::Json => print_json(&args, &scripts, total, &histogram)?,
        OutputFormat::Tsv => print_tsv(&scripts, &histogram, args.summary),
    }

    Ok(())
}

fn print_text(
    scripts: &[EnumeratedScript],
    total: usize,
    histogram: &std::collections::BTreeMap<usize, usize>,
    summary: bool,
) {
    if !summary {
        for s in scripts {
            println!("{}\t{}\t{}", s.script, s.end, s.cost);
        }
        println!();
    }

    println!("Total scripts: {total}");
    println!("Cost distribution:");
    for (cost, count) in histogram {
        println!("  {cost:>3}  {count}");
    }
}

fn print_json(
    args: &ScriptsArgs,
    scripts: &[EnumeratedScript],
    total: usize,
    histogram: &std::collections::BTreeMap<usize, usize>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "source": args.source,
        "target": args.target,
        "total": total,
        "histogram": histogram,
    });
    if !args.summary {
        output["scripts"] = serde_json::to_value(scripts)?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(
    scripts: &[EnumeratedScript],
    histogram: &std::collections::BTreeMap<usize, usize>,
    summary: bool,
) {
    if summary {
        println!("cost\tcount");
        for (cost, count) in histogram {
            println!("{cost}\t{count}");
        }
        return;
    }

    println!("script\tend\tcost");
    for s in scripts {
        println!("{}\t{}\t{}", s.script, s.end, s.cost);
    }
}
