//! Command-line interface for datagen
//!
//! # Usage Examples
//!
//! ## Row-count runs
//! ```bash
//! # Three columns, semicolon separated, 1000 rows to stdout
//! datagen generate \
//!   --fields "rowNumber,name.fullName,randomLong(18:99)" \
//!   --separator ";" \
//!   --rows 1000
//!
//! # With a header line and a file destination
//! datagen generate \
//!   --fields "rowNumber,internet.email" \
//!   --header "id,email" \
//!   --rows 50000 --output users.txt
//! ```
//!
//! ## Byte-budget runs
//! ```bash
//! # Roughly 100 MB of output, 4 parallel workers
//! datagen generate \
//!   --fields "internet.uuid,randomDouble(2:0:500),address.city" \
//!   --mbs 100 --workers 4 --output payments.txt
//! ```
//!
//! ## Paced emission
//! ```bash
//! # One row every 200ms, flushed per row (simulates a streaming source)
//! datagen generate --fields "date.iso8601,randomLong(1:5)" \
//!   --rows 100 --delay-ms 200
//! ```
//!
//! ## Field-spec files
//! ```bash
//! datagen generate --spec-file rows.yaml --rows 1000
//! ```
//!
//! ## Discovering fields
//! ```bash
//! datagen list-fields
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use datagen::config::RunTarget;
use datagen::run::{run_with_byte_budget, run_with_row_count, RunOpts};
use datagen::sink::{shared, FileSink, SharedSink, StdoutSink};
use datagen_provider::{BuiltinProvider, ValueProvider};
use datagen_rowgen::{RowGenerator, RowSpec};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "A CLI for generating synthetic delimited-text data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate rows from field expressions
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// List every field expression the built-in provider supports
    ListFields,
}

#[derive(Args)]
struct GenerateArgs {
    /// Comma-separated field expressions, one per output column
    #[arg(long, value_delimiter = ',', conflicts_with = "spec_file")]
    fields: Vec<String>,

    /// YAML field-spec file (fields/header/separator), alternative to --fields
    #[arg(long, value_name = "PATH")]
    spec_file: Option<PathBuf>,

    /// Number of rows to generate (mutually exclusive with --mbs)
    #[arg(long)]
    rows: Option<u64>,

    /// Approximate output volume in megabytes (mutually exclusive with --rows)
    #[arg(long)]
    mbs: Option<u64>,

    /// Field separator for rendered lines (may be multi-character)
    #[arg(long)]
    separator: Option<String>,

    /// Comma-separated header column names (mutually exclusive with --header-line)
    #[arg(long, value_delimiter = ',', conflicts_with = "spec_file")]
    header: Option<Vec<String>>,

    /// Preformatted header line emitted verbatim
    #[arg(long, conflicts_with_all = ["header", "spec_file"])]
    header_line: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of parallel worker tasks (1 = strictly ordered output)
    #[arg(long, default_value = "1")]
    workers: usize,

    /// Per-row pacing delay in milliseconds (forces per-row flushing)
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args).await,
        Commands::ListFields => {
            run_list_fields(&BuiltinProvider::new());
            Ok(())
        }
    }
}

async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let target = RunTarget::from_options(args.rows, args.mbs)?;

    let spec = build_spec(&args)?;
    let rowgen = Arc::new(RowGenerator::new(spec, Arc::new(BuiltinProvider::new()))?);

    let sink = open_sink(args.output.as_deref())?;

    let opts = RunOpts {
        workers: args.workers,
        pacing_delay: Duration::from_millis(args.delay_ms),
        seed: args.seed,
    };
    if !opts.pacing_delay.is_zero() && opts.workers > 1 {
        tracing::warn!(
            "pacing with {} workers does not produce one steady emission rate; \
             consider --workers 1",
            opts.workers
        );
    }

    tracing::info!("Generating with target {:?} (seed={})", target, opts.seed);

    match target {
        RunTarget::Rows(rows) => {
            run_with_row_count(rowgen, sink, rows, opts).await?;
        }
        RunTarget::Megabytes(megabytes) => {
            run_with_byte_budget(rowgen, sink, megabytes, opts).await?;
        }
    }

    Ok(())
}

fn build_spec(args: &GenerateArgs) -> anyhow::Result<RowSpec> {
    let mut spec = if let Some(path) = &args.spec_file {
        RowSpec::from_file(path)
            .with_context(|| format!("Failed to load field spec from {path:?}"))?
    } else {
        let mut spec = RowSpec::new(args.fields.clone());
        if let Some(header) = &args.header {
            spec = spec.with_header(header.clone());
        }
        if let Some(header_line) = &args.header_line {
            spec = spec.with_header_line(header_line.clone());
        }
        spec
    };

    // --separator overrides the spec-file value as well.
    if let Some(separator) = &args.separator {
        spec = spec.with_separator(separator.clone());
    }

    spec.validate()?;
    Ok(spec)
}

fn open_sink(output: Option<&std::path::Path>) -> anyhow::Result<SharedSink> {
    match output {
        Some(path) => {
            let sink = FileSink::create(path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            Ok(shared(sink))
        }
        None => Ok(shared(StdoutSink::new())),
    }
}

fn run_list_fields(provider: &dyn ValueProvider) {
    // The parameterized and index-driven forms first, then the full
    // provider namespace.
    println!("randomString(pattern)");
    println!("randomLong(min:max)");
    println!("randomDouble(scale:min:max)");
    println!("sequence(start:increment)");
    println!("rowNumber");
    for path in provider.available_paths() {
        println!("{path}");
    }
}
