mod commands;
mod dialog;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quizconv",
    version,
    about = "Convert quiz documents (xlsx, docx, pdf) into JSON question banks"
)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quiz file and write <name>.json next to it
    Convert {
        /// Path to an .xlsx, .docx or .pdf file
        input_file: PathBuf,
    },
    /// Parse a quiz file and print the questions without writing anything
    Parse {
        /// Path to an .xlsx, .docx or .pdf file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Interactive shell: open a file, then convert it (default)
    Shell,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Convert { input_file } => commands::convert::run(&input_file),
        Commands::Parse { input_file, output } => commands::parse::run(&input_file, &output),
        Commands::Shell => commands::shell::run(),
    };

    if let Err(dialog) = result {
        eprint!("{dialog}");
        std::process::exit(1);
    }
}
