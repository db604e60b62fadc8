//! grlaw CLI

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use gr_core::RecurrenceCurve;
use gr_prob::RecurrenceLaw;
use gr_source::{Catalog, SourceConfig, SourceGenerator};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grlaw")]
#[command(about = "grlaw - Gutenberg-Richter magnitude-frequency law")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exceedance probability and density over a set of magnitudes
    Evaluate {
        /// Input JSON with a `magnitudes` array
        #[arg(short, long, conflicts_with_all = ["start", "stop", "points"])]
        input: Option<PathBuf>,

        /// Grid mode: first magnitude. Requires `--stop` and `--points`.
        #[arg(long, requires_all = ["stop", "points"], allow_hyphen_values = true)]
        start: Option<f64>,

        /// Grid mode: last magnitude. Requires `--start` and `--points`.
        #[arg(long, requires_all = ["start", "points"], allow_hyphen_values = true)]
        stop: Option<f64>,

        /// Grid mode: number of points (inclusive). Requires `--start` and `--stop`.
        #[arg(long, requires_all = ["start", "stop"])]
        points: Option<usize>,

        /// Lower truncation magnitude
        #[arg(long, allow_hyphen_values = true)]
        m_min: f64,

        /// Upper truncation magnitude
        #[arg(long, allow_hyphen_values = true)]
        m_max: f64,

        /// Gutenberg-Richter b-value
        #[arg(long, default_value = "1.0")]
        b_value: f64,

        /// Skip parameter validation and apply the formula as-is.
        /// Non-finite results are written as `null`.
        #[arg(long)]
        unchecked: bool,

        /// Evaluate on the rayon thread pool
        #[arg(long)]
        parallel: bool,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic seismic source catalog
    Sources {
        /// Generator configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// RNG seed (overrides the config's `seed`)
        #[arg(long)]
        seed: Option<u64>,

        /// Output catalog file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Annual exceedance rates of a source catalog over a magnitude grid
    Rates {
        /// Catalog JSON written by `grlaw sources`
        #[arg(long)]
        catalog: PathBuf,

        /// First magnitude
        #[arg(long, default_value = "4.0", allow_hyphen_values = true)]
        start: f64,

        /// Last magnitude
        #[arg(long, default_value = "8.0", allow_hyphen_values = true)]
        stop: f64,

        /// Number of points (inclusive)
        #[arg(long, default_value = "41")]
        points: usize,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Evaluate {
            input,
            start,
            stop,
            points,
            m_min,
            m_max,
            b_value,
            unchecked,
            parallel,
            output,
        } => {
            let magnitudes = load_magnitudes(input.as_ref(), start, stop, points)?;
            cmd_evaluate(&magnitudes, m_min, m_max, b_value, unchecked, parallel, output.as_ref())
        }
        Commands::Sources { config, seed, output } => cmd_sources(&config, seed, output.as_ref()),
        Commands::Rates { catalog, start, stop, points, output } => {
            cmd_rates(&catalog, start, stop, points, output.as_ref())
        }
        Commands::Version => {
            println!("grlaw {}", gr_core::VERSION);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MagnitudesJson {
    magnitudes: Vec<f64>,
}

fn load_magnitudes(
    input: Option<&PathBuf>,
    start: Option<f64>,
    stop: Option<f64>,
    points: Option<usize>,
) -> Result<Vec<f64>> {
    if let Some(path) = input {
        tracing::info!(path = %path.display(), "loading magnitudes");
        let json = std::fs::read_to_string(path)?;
        let parsed: MagnitudesJson = serde_json::from_str(&json)?;
        return Ok(parsed.magnitudes);
    }
    match (start, stop, points) {
        (Some(start), Some(stop), Some(points)) => Ok(gr_prob::math::linspace(start, stop, points)),
        _ => bail!("either --input or --start/--stop/--points is required"),
    }
}

fn cmd_evaluate(
    magnitudes: &[f64],
    m_min: f64,
    m_max: f64,
    b_value: f64,
    unchecked: bool,
    parallel: bool,
    output: Option<&PathBuf>,
) -> Result<()> {
    let curve = if unchecked {
        let (probability, pdf) = if parallel {
            gr_prob::evaluate_par(magnitudes, m_min, m_max, b_value)
        } else {
            gr_prob::evaluate_with_b_value(magnitudes, m_min, m_max, b_value)
        };
        let non_finite = pdf.iter().filter(|d| !d.is_finite()).count();
        if non_finite > 0 {
            tracing::warn!(non_finite, m_min, m_max, "pdf has non-finite values");
        }
        RecurrenceCurve { magnitudes: magnitudes.to_vec(), probability, pdf, m_min, m_max, b_value }
    } else {
        let law = RecurrenceLaw::with_b_value(m_min, m_max, b_value)?;
        if parallel { law.evaluate_par(magnitudes) } else { law.evaluate(magnitudes) }
    };
    tracing::info!(n = curve.len(), m_min, m_max, b_value, "recurrence law evaluated");

    write_json(output, serde_json::to_value(&curve)?)
}

fn cmd_sources(config: &PathBuf, seed: Option<u64>, output: Option<&PathBuf>) -> Result<()> {
    tracing::info!(path = %config.display(), "loading source config");
    let config = SourceConfig::from_json_file(config)?;
    let mut generator = match seed {
        Some(seed) => SourceGenerator::with_seed(config, seed)?,
        None => SourceGenerator::new(config)?,
    };
    let catalog = generator.generate_all();
    tracing::info!(sources = catalog.len(), "catalog generated");

    match output {
        Some(path) => catalog.save_json(path)?,
        None => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }
    Ok(())
}

fn cmd_rates(
    catalog: &PathBuf,
    start: f64,
    stop: f64,
    points: usize,
    output: Option<&PathBuf>,
) -> Result<()> {
    tracing::info!(path = %catalog.display(), "loading catalog");
    let catalog = Catalog::load_json(catalog)?;
    if catalog.is_empty() {
        bail!("catalog has no sources");
    }
    let magnitudes = gr_prob::math::linspace(start, stop, points);

    let mut sources = Vec::with_capacity(catalog.len());
    for (name, source) in catalog.iter() {
        let rates = magnitudes
            .iter()
            .map(|&m| source.exceedance_rate(m))
            .collect::<gr_core::Result<Vec<f64>>>()?;
        sources.push(serde_json::json!({ "name": name, "rate": rates }));
    }
    let total = magnitudes
        .iter()
        .map(|&m| catalog.exceedance_rate(m))
        .collect::<gr_core::Result<Vec<f64>>>()?;
    tracing::debug!(sources = sources.len(), points = magnitudes.len(), "rates computed");

    let output_json = serde_json::json!({
        "magnitudes": magnitudes,
        "total_rate": total,
        "sources": sources,
    });
    write_json(output, output_json)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
