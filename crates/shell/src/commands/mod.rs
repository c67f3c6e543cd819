//! The commands under the `bubble-shell` CLI.

pub mod run;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a fresh ring and run the simulation without rendering. `out_path` must be a directory.
    Run {
        /// The number of ticks to run.
        #[arg(short('n'), long, default_value_t = 1000)]
        steps: usize,

        /// Save the positions every this many ticks. The first and last ticks are always saved.
        #[arg(short('e'), long, default_value_t = 10)]
        save_every: usize,

        /// Compute forces and move points in parallel.
        #[arg(short('p'), long)]
        parallel: bool,
    },
    /// Write the configuration in use, with all defaults filled in. `out_path` must be a file with '.json' or '.yaml' extension.
    WriteConfig,
}
