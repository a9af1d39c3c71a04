//! Simulate command - random genomes, reads and substring pairs.
//!
//! Every subcommand accepts `--seed` for reproducible output.

use clap::{Args, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{text, OutputFormat};
use crate::simulate::{
    kmer_counts, random_genome, sample_pairs, sample_reads, BaseComposition, ErrorProfile,
};

#[derive(Args)]
pub struct SimulateArgs {
    #[command(subcommand)]
    pub command: SimulateCommand,
}

#[derive(Subcommand)]
pub enum SimulateCommand {
    /// Generate an i.i.d. random genome
    Genome(GenomeArgs),

    /// Sample reads with sequencing errors from a circular genome
    Reads(ReadsArgs),

    /// Sample substring pairs of a genome and report their edit distance
    Pairs(PairsArgs),
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CompositionPreset {
    #[default]
    Uniform,
    GcRich,
    GcPoor,
}

impl From<CompositionPreset> for BaseComposition {
    fn from(preset: CompositionPreset) -> Self {
        match preset {
            CompositionPreset::Uniform => Self::uniform(),
            CompositionPreset::GcRich => Self::gc_rich(),
            CompositionPreset::GcPoor => Self::gc_poor(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ErrorPreset {
    None,
    Hamming,
    #[default]
    Edit,
}

impl From<ErrorPreset> for ErrorProfile {
    fn from(preset: ErrorPreset) -> Self {
        match preset {
            ErrorPreset::None => Self::none(),
            ErrorPreset::Hamming => Self::hamming(),
            ErrorPreset::Edit => Self::edit(),
        }
    }
}

#[derive(Args)]
pub struct GenomeArgs {
    /// Number of bases to generate
    #[arg(required = true)]
    pub length: usize,

    /// Base composition preset
    #[arg(long, value_enum, default_value = "uniform")]
    pub composition: CompositionPreset,

    /// Custom weights for A, C, G and T (overrides --composition)
    #[arg(long, num_args = 4, value_names = ["A", "C", "G", "T"])]
    pub weights: Option<Vec<f64>>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ReadsArgs {
    /// Genome to sample from; it is treated as circular
    #[arg(required = true)]
    pub genome: String,

    /// Number of reads
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Length of each read before errors
    #[arg(short, long, default_value = "100")]
    pub length: usize,

    /// Error profile preset
    #[arg(long, value_enum, default_value = "edit")]
    pub errors: ErrorPreset,

    /// Substitution rate (overrides the preset)
    #[arg(long)]
    pub p_sub: Option<f64>,

    /// Deletion rate (overrides the preset)
    #[arg(long)]
    pub p_del: Option<f64>,

    /// Insertion rate (overrides the preset)
    #[arg(long)]
    pub p_ins: Option<f64>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct PairsArgs {
    /// Genome to sample from
    #[arg(required = true)]
    pub genome: String,

    /// Length of each substring
    #[arg(short, long, required = true)]
    pub length: usize,

    /// Number of pairs
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Symbols shared by the two substrings; 0 samples them independently
    #[arg(long, default_value = "0")]
    pub overlap: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Execute the simulate command
///
/// # Errors
///
/// Returns an error if a simulation parameter is invalid.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SimulateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        SimulateCommand::Genome(args) => run_genome(&args, format, verbose),
        SimulateCommand::Reads(args) => run_reads(&args, format, verbose),
        SimulateCommand::Pairs(args) => run_pairs(&args, format, verbose),
    }
}

fn run_genome(args: &GenomeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let composition = match args.weights.as_deref() {
        Some(&[a, c, g, t]) => BaseComposition::custom(a, c, g, t)?,
        Some(weights) => anyhow::bail!("expected 4 weights, got {}", weights.len()),
        None => args.composition.into(),
    };
    let mut rng = rng_from_seed(args.seed);
    let genome = random_genome(args.length, &composition, &mut rng)?;

    if verbose {
        eprintln!("Generated {} bases with composition {composition}", genome.len());
        for (base, count) in kmer_counts(&genome, 1) {
            eprintln!("  {base}: {count}");
        }
    }

    match format {
        OutputFormat::Text => println!("{}", text(&genome)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "length": genome.len(),
                "composition": composition.normalized(),
                "sequence": text(&genome),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("length\tsequence");
            println!("{}\t{}", genome.len(), text(&genome));
        }
    }

    Ok(())
}

fn run_reads(args: &ReadsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut profile: ErrorProfile = args.errors.into();
    if let Some(p) = args.p_sub {
        profile.p_sub = p;
    }
    if let Some(p) = args.p_del {
        profile.p_del = p;
    }
    if let Some(p) = args.p_ins {
        profile.p_ins = p;
    }

    if verbose {
        eprintln!(
            "Sampling {} reads of {} symbols (sub={} del={} ins={})",
            args.count, args.length, profile.p_sub, profile.p_del, profile.p_ins
        );
    }

    let mut rng = rng_from_seed(args.seed);
    let reads = sample_reads(
        args.genome.as_bytes(),
        args.count,
        args.length,
        &profile,
        &mut rng,
    )?;

    match format {
        OutputFormat::Text => {
            for (id, read) in reads.iter().enumerate() {
                println!("read {id} origin={} edits={}", read.origin, read.script.cost());
                if verbose {
                    println!("  template: {}", text(&read.template));
                    println!("  script:   {}", read.script);
                }
                println!("{}", text(&read.sequence));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reads)?),
        OutputFormat::Tsv => {
            println!("id\torigin\tsequence\tscript");
            for (id, read) in reads.iter().enumerate() {
                println!(
                    "{id}\t{}\t{}\t{}",
                    read.origin,
                    text(&read.sequence),
                    read.script
                );
            }
        }
    }

    Ok(())
}

fn run_pairs(args: &PairsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut rng = rng_from_seed(args.seed);
    let pairs = sample_pairs(
        args.genome.as_bytes(),
        args.length,
        args.count,
        args.overlap,
        &mut rng,
    )?;

    if verbose && !pairs.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean = pairs.iter().map(|p| p.distance as f64).sum::<f64>() / pairs.len() as f64;
        eprintln!("Sampled {} pairs, mean distance {mean:.3}", pairs.len());
    }

    match format {
        OutputFormat::Text => {
            println!("position1,position2,distance");
            for pair in &pairs {
                println!("{},{},{}", pair.position1, pair.position2, pair.distance);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pairs)?),
        OutputFormat::Tsv => {
            println!("position1\tposition2\tdistance");
            for pair in &pairs {
                println!("{}\t{}\t{}", pair.position1, pair.position2, pair.distance);
            }
        }
    }

    Ok(())
}
