//! CLI for running the bubble-ring simulation without a renderer.

mod commands;
mod config_file;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path to a JSON or YAML configuration file. The defaults are used if absent.
    #[arg(short('c'), long)]
    config: Option<PathBuf>,

    /// The path to the output directory or file, depending on the subcommand used.
    #[arg(short('o'), long)]
    out_path: PathBuf,

    /// The random seed to use for generating the initial ring.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "bubble-shell.log")]
    log_name: String,

    /// Whether to record debug messages in the log file.
    #[arg(short('v'), long)]
    verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.verbose)?;
    ftlog::info!("Log file: {log_path:?}");

    let config = config_file::read_or_default(args.config.as_ref())?;
    ftlog::info!("Using config: {config:?}");

    match args.command {
        Commands::Run {
            steps,
            save_every,
            parallel,
        } => commands::run::run_simulation(config, args.seed, steps, save_every, parallel, &args.out_path),
        Commands::WriteConfig => config_file::write(&config, &args.out_path),
    }
}
