use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "order-report")]
#[command(about = "Customer order classification report generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print per-stage row counts
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process an order export and write the classification summary
    Report {
        /// Input xlsx file (Customer Order Report export)
        #[arg(required = true)]
        input: PathBuf,

        /// Output xlsx file (default: timestamped name in the configured
        /// output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Worksheet name (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// Banner rows before the header row (default: 4)
        #[arg(long)]
        skip_rows: Option<usize>,
    },

    /// Validate the export's schema without writing a report
    Check {
        /// Input xlsx file
        #[arg(required = true)]
        input: PathBuf,

        /// Worksheet name (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,

        /// Banner rows before the header row (default: 4)
        #[arg(long)]
        skip_rows: Option<usize>,
    },

    /// Show or edit the stored defaults
    Config {
        /// Set the default output directory
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },
}
