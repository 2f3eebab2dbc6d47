use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "tracecol-cmd")]
#[command(about = "Command-line utility for tracecol column files")]
#[command(version)]
struct Cli {
    /// Raise the log level (-v for debug, -vv for trace); otherwise `RUST_LOG` applies
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random set-id column file
    Generate {
        /// Number of rows in the column
        #[arg(long)]
        rows: u32,

        /// Seed of the random generator
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Probability that a row starts a new set
        #[arg(long, default_value_t = 0.05)]
        new_set_probability: f64,

        /// Path of the column file to create
        output: String,
    },

    /// Display summary information about a column file
    Inspect {
        /// Also list every set of the column
        #[arg(short, long)]
        verbose: bool,

        /// Column file to inspect
        column: String,
    },

    /// Find the rows of a column that satisfy a predicate
    Filter {
        /// Comparison operator
        #[arg(long, value_enum)]
        op: commands::filter::OpArg,

        /// Operand of the comparison (null when omitted)
        #[arg(long, allow_negative_numbers = true)]
        value: Option<i64>,

        /// First row of the searched range
        #[arg(long)]
        begin: Option<u32>,

        /// End of the searched range (exclusive, defaults to the row count)
        #[arg(long)]
        end: Option<u32>,

        /// Search only these rows instead of a range
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["begin", "end"])]
        indices: Option<Vec<u32>>,

        /// Assert that the values at `--indices` are non-decreasing
        #[arg(long, requires = "indices")]
        sorted: bool,

        /// Column file to search
        column: String,
    },

    /// Order rows by their values in a column
    Sort {
        /// Keep rows with equal values in their original order
        #[arg(long)]
        stable: bool,

        /// Rows to order
        #[arg(long, value_delimiter = ',', required = true)]
        rows: Vec<u32>,

        /// Column file providing the values
        column: String,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        1 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            rows,
            seed,
            new_set_probability,
            output,
        } => commands::generate::run(rows, seed, new_set_probability, output),
        Commands::Inspect { verbose, column } => commands::inspect::run(verbose, column),
        Commands::Filter {
            op,
            value,
            begin,
            end,
            indices,
            sorted,
            column,
        } => commands::filter::run(
            commands::filter::FilterArgs {
                op,
                value,
                begin,
                end,
                indices,
                sorted,
            },
            column,
        ),
        Commands::Sort {
            stable,
            rows,
            column,
        } => commands::sort::run(stable, rows, column),
    }
}
