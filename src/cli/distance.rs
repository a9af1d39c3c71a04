use clap::Args;

use crate::cli::{text, OutputFormat};
use crate::core::PositionPair;
use crate::distance::{
    align, distance, normalized_distance, overlap_profile, render_alignment, AlignedRows,
};

#[derive(Args)]
pub struct DistanceArgs {
    /// Source sequence (X)
    #[arg(required = true)]
    pub source: String,

    /// Target sequence (Y)
    #[arg(required = true)]
    pub target: String,

    /// Also report the distance divided by the combined length
    #[arg(long)]
    pub normalized: bool,
}

#[derive(Args)]
pub struct AlignArgs {
    /// Source sequence (X)
    #[arg(required = true)]
    pub source: String,

    /// Target sequence (Y)
    #[arg(required = true)]
    pub target: String,

    /// Character shown where a row does not advance
    #[arg(long, default_value = "-")]
    pub gap: char,
}

#[derive(Args)]
pub struct OverlapsArgs {
    /// Sequence whose suffixes are compared
    #[arg(required = true)]
    pub source: String,

    /// Sequence whose prefixes are compared
    #[arg(required = true)]
    pub target: String,
}

/// Execute the distance command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run_distance(args: DistanceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let x = args.source.as_bytes();
    let y = args.target.as_bytes();

    if verbose {
        eprintln!("Source: {} symbols, target: {} symbols", x.len(), y.len());
    }

    let d = distance(x, y);
    let normalized = args.normalized.then(|| normalized_distance(x, y));

    match format {
        OutputFormat::Text => {
            println!("{d}");
            if let Some(value) = normalized {
                println!("{value:.6}");
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": args.source,
                "target": args.target,
                "distance": d,
                "normalized": normalized,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("source\ttarget\tdistance\tnormalized");
            println!(
                "{}\t{}\t{d}\t{}",
                args.source,
                args.target,
                normalized.map_or_else(String::new, |v| format!("{v:.6}"))
            );
        }
    }

    Ok(())
}

/// Execute the align command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run_align(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let x = args.source.as_bytes();
    let y = args.target.as_bytes();

    let alignment = align(x, y);
    let rows = render_alignment(x, y, &alignment.path, args.gap);

    if verbose {
        eprintln!(
            "Aligned {} columns ({} edits)",
            alignment.path.len(),
            alignment.distance
        );
    }

    match format {
        OutputFormat::Text => print_text_alignment(
            &alignment.script.to_string(),
            alignment.distance,
            &rows,
            &alignment.path,
        ),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": args.source,
                "target": args.target,
                "distance": alignment.distance,
                "script": alignment.script,
                "path": alignment.path,
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("distance\tscript\tsource_row\ttarget_row");
            println!(
                "{}\t{}\t{}\t{}",
                alignment.distance, alignment.script, rows.source, rows.target
            );
        }
    }

    Ok(())
}

fn print_text_alignment(
    script: &str,
    distance: usize,
    rows: &AlignedRows,
    path: &[PositionPair],
) {
    println!("Alignment");
    println!("{}", "=".repeat(60));
    println!("  Distance: {distance}");
    println!("  Script:   {script}");
    println!();
    println!("  {}", rows.source);
    println!("  {}", rows.target);
    println!();
    let path: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("  Path: {}", path.join(" "));
}

/// Execute the overlaps command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run_overlaps(args: OverlapsArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let x = args.source.as_bytes();
    let y = args.target.as_bytes();
    let profile = overlap_profile(x, y);

    match format {
        OutputFormat::Text => {
            for score in &profile {
                println!(
                    "{}  {}\t{:.6}",
                    text(&x[score.offset..]),
                    text(&y[..score.target_len]),
                    score.normalized
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Tsv => {
            println!("offset\tsource_len\ttarget_len\tdistance\tnormalized");
            for score in &profile {
                println!(
                    "{}\t{}\t{}\t{}\t{:.6}",
                    score.offset,
                    score.source_len,
                    score.target_len,
                    score.distance,
                    score.normalized
                );
            }
        }
    }

    Ok(())
}
