//! c45-convert - convert a C4.5 dataset into a numeric matrix file.
//!
//! Finds `<DATASET>.names` and `<DATASET>.data` below the input directory,
//! parses them and writes the numeric matrix as an Arrow IPC (Feather) file
//! tagged with the dataset name.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use c45data::io::{locate_dataset, NamedMatrix, IPC_EXTENSION};
use c45data::parse::{ClassLocation, LabelColumn, ParseOptions};
use c45data::{run_with_threads, Parallelism, Sequence};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug, Clone)]
#[command(name = "c45-convert")]
#[command(version, about, long_about = None)]
struct CliArgs {
    /// Dataset name: looks for <DATASET>.names and <DATASET>.data
    dataset: String,

    /// Directory tree to search for the dataset files
    #[arg(short = 'd', long = "input-dir", value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Output file (default: <DATASET>.arrow)
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Field value denoting a missing value
    #[arg(long = "missing-token", value_name = "TOK", default_value = "?")]
    missing_token: String,

    /// Position of the class declaration in the .names file (auto, first, last)
    #[arg(long = "class-location", value_name = "WHERE", default_value_t = ClassLocation::Auto)]
    class_location: ClassLocation,

    /// Position of the label on record lines (last, first)
    #[arg(long = "label-column", value_name = "WHERE", default_value_t = LabelColumn::Last)]
    label_column: LabelColumn,

    /// Treat the first non-class declaration as an identifier column
    #[arg(long = "id-column")]
    id_column: bool,

    /// Worker threads for record validation (0 = auto, 1 = sequential)
    #[arg(short = 'j', long = "threads", default_value_t = 1)]
    threads: usize,

    /// Print the parsed schema as JSON to stdout
    #[arg(long = "dump-schema")]
    dump_schema: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl CliArgs {
    fn parse_options(&self, parallelism: Parallelism) -> ParseOptions {
        ParseOptions::builder()
            .missing_token(self.missing_token.as_str())
            .class_location(self.class_location)
            .label_column(self.label_column)
            .first_feature_is_id(self.id_column)
            .parallelism(parallelism)
            .build()
    }

    fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{IPC_EXTENSION}", self.dataset)))
    }
}

fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}

fn convert(args: &CliArgs, parallelism: Parallelism) -> Result<()> {
    let options = args.parse_options(parallelism);

    let files = locate_dataset(&args.dataset, &args.input_dir)
        .with_context(|| format!("cannot load dataset '{}'", args.dataset))?;
    let set = files
        .load(&options)
        .with_context(|| format!("cannot parse dataset '{}'", args.dataset))?;
    info!(
        examples = set.len(),
        columns = set.n_columns(),
        "parsed {}",
        files.names.display()
    );
    for (index, meta) in set.schema().iter().enumerate() {
        let missing = set.count_missing(index);
        if missing > 0 {
            info!("{}: {missing} missing values", meta.name);
        }
    }

    if args.dump_schema {
        let json = serde_json::to_string_pretty(set.schema().as_ref())?;
        println!("{json}");
    }

    let output = args.output_path();
    let matrix = NamedMatrix::from_example_set(&args.dataset, &set)?;
    matrix
        .write_ipc_file(&output)
        .with_context(|| format!("cannot write {}", output.display()))?;
    info!("wrote {}", output.display());

    Ok(())
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose, args.quiet)?;

    run_with_threads(args.threads, |parallelism| convert(&args, parallelism))
        .context("failed to build thread pool")?
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
