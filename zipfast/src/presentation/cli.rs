use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "zipfast: bundle files into a ZIP archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack files (directories are walked) into a ZIP archive
    Pack {
        inputs: Vec<PathBuf>,

        /// output file, or an existing directory to get a timestamped name
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// 0 = store, 1..=9 = deflate level (overrides the config file)
        #[arg(long)]
        level: Option<u32>,

        /// JSON pipeline config
        #[arg(long)]
        config: Option<PathBuf>,

        /// append a record of this run to the given history file
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// List entries of a ZIP archive
    List { archive: PathBuf },

    /// Print the size reduction in percent
    Ratio { original: u64, compressed: u64 },

    /// Show recorded compression runs
    History {
        #[arg(long, default_value = "zipfast_history.json")]
        file: PathBuf,
    },
}
