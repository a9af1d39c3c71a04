//! Command-line interface for edit-scripts.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **distance**: Edit distance between two sequences
//! - **align**: One optimal alignment, rendered as two rows
//! - **scripts**: Every edit script between two short sequences
//! - **score**: Total script mass under a stochastic operation model
//! - **apply**: Materialize variations onto a backbone
//! - **overlaps**: Normalized distance of every suffix/prefix overlap
//! - **simulate**: Random genomes, reads and substring pairs
//!
//! ## Usage
//!
//! ```text
//! # Distance and alignment
//! edit-scripts distance ACGG GG
//! edit-scripts align AGCTACCGTGAACTGGT TACCGTAAAGCTAATTGTAA
//!
//! # All scripts, JSON output for scripting
//! edit-scripts scripts ACGG GG --format json
//!
//! # Script mass with a custom model
//! edit-scripts score ACTA ACTA --p-match 0.6 --p-sub 0.2 --p-del 0.1 --p-ins 0.1
//!
//! # Two independent haplotypes of one backbone
//! edit-scripts apply ACGACTACCACACAT --variant hap1=S:0:TG,D:5:2 --variant hap2=I:3:TTT
//!
//! # Reproducible simulation
//! edit-scripts simulate genome 1000 --composition gc-rich --seed 42
//! ```

use clap::{Parser, Subcommand};

pub mod apply;
pub mod distance;
pub mod score;
pub mod scripts;
pub mod simulate;

#[derive(Parser)]
#[command(name = "edit-scripts")]
#[command(version)]
#[command(about = "Edit distance, alignment and edit-script tools for symbol sequences")]
#[command(
    long_about = "edit-scripts computes edit distances and optimal alignments, enumerates every edit script between short sequences, scores scripts under a stochastic operation model and replays variations onto a backbone.\n\nSequences are given directly on the command line; no file formats are read."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two sequences
    Distance(distance::DistanceArgs),

    /// One optimal alignment between two sequences
    Align(distance::AlignArgs),

    /// Normalized distance of every suffix/prefix overlap
    Overlaps(distance::OverlapsArgs),

    /// Enumerate every edit script between two short sequences
    Scripts(scripts::ScriptsArgs),

    /// Probability of the target given the source, summed over all scripts
    Score(score::ScoreArgs),

    /// Apply variations to a backbone sequence
    Apply(apply::ApplyArgs),

    /// Generate random genomes, reads and substring pairs
    Simulate(simulate::SimulateArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Convert a sequence for display
pub(crate) fn text(sequence: &[u8]) -> String {
    String::from_utf8_lossy(sequence).into_owned()
}
