//! physummary - compare descriptive statistics of count matrices
//!
//! Command-line interface for side-by-side dataset summaries.

use clap::{Parser, ValueEnum};
use community_summary::compare::{build_summary, build_summary_unlabeled, SummaryOptions, SummaryReport};
use community_summary::data::CountMatrix;
use community_summary::error::{Result, SummaryError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format for the summary table
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// Aligned plain text
    Text,
    /// JSON document (non-finite values become null)
    Json,
    /// YAML document
    Yaml,
}

/// Summarize and compare OTU count matrices
#[derive(Parser)]
#[command(name = "physummary")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Count matrix TSV files, as `name=path` or plain `path`.
    /// Unnamed datasets are labelled Phys1, Phys2, ...
    #[arg(required = true, value_name = "DATASET")]
    datasets: Vec<String>,

    /// Add distributional statistics (quartiles, CQV, prevalence, singletons, zeros)
    #[arg(short, long)]
    extended: bool,

    /// Produce a long table (one row per dataset and statistic)
    #[arg(short, long)]
    long: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML file with summary options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// A dataset argument split into optional label and path.
#[derive(Debug, PartialEq)]
struct DatasetSpec {
    label: Option<String>,
    path: PathBuf,
}

impl DatasetSpec {
    fn parse(arg: &str) -> Result<Self> {
        match arg.split_once('=') {
            Some((label, path)) => {
                if path.is_empty() {
                    return Err(SummaryError::InvalidDatasetSpec(format!(
                        "missing path in '{}'",
                        arg
                    )));
                }
                Ok(Self {
                    label: Some(label.to_string()),
                    path: PathBuf::from(path),
                })
            }
            None => Ok(Self {
                label: None,
                path: PathBuf::from(arg),
            }),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut options = match &cli.config {
        Some(path) => SummaryOptions::from_yaml(&std::fs::read_to_string(path)?)?,
        None => SummaryOptions::default(),
    };
    options.extended |= cli.extended;
    options.long |= cli.long;

    let specs = cli
        .datasets
        .iter()
        .map(|arg| DatasetSpec::parse(arg))
        .collect::<Result<Vec<_>>>()?;

    let n_labelled = specs.iter().filter(|s| s.label.is_some()).count();
    if n_labelled != 0 && n_labelled != specs.len() {
        return Err(SummaryError::InvalidDatasetSpec(
            "either name every dataset (name=path) or none".to_string(),
        ));
    }

    let mut counts = Vec::with_capacity(specs.len());
    for spec in &specs {
        eprintln!("Loading {:?}...", spec.path);
        let matrix = CountMatrix::from_tsv(&spec.path)?;
        eprintln!(
            "  {} features x {} samples",
            matrix.n_features(),
            matrix.n_samples()
        );
        counts.push(matrix);
    }

    let report = if n_labelled == 0 {
        let refs: Vec<&CountMatrix> = counts.iter().collect();
        build_summary_unlabeled(&refs, options)?
    } else {
        let labelled: Vec<(&str, &CountMatrix)> = specs
            .iter()
            .zip(&counts)
            .map(|(spec, matrix)| (spec.label.as_deref().unwrap_or_default(), matrix))
            .collect();
        build_summary(&labelled, options)?
    };

    for diagnostic in &report.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    match &cli.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_report(&report, cli.format, &mut writer)?;
            writer.flush()?;
            eprintln!("Wrote summary to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&report, cli.format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(report: &SummaryReport, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Tsv => report.table.write_delimited(writer, b'\t'),
        OutputFormat::Csv => report.table.write_delimited(writer, b','),
        OutputFormat::Text => {
            write!(writer, "{}", report.table)?;
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(writer, report)?;
            Ok(())
        }
    }
}
