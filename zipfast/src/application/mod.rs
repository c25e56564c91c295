pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use zipfast_core::error::Result;

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Pack {
            inputs,
            out,
            level,
            config,
            history,
        } => handlers::handle_pack(inputs, out, level, config, history).await,
        Commands::List { archive } => handlers::handle_list(archive),
        Commands::Ratio {
            original,
            compressed,
        } => {
            handlers::handle_ratio(original, compressed);
            Ok(())
        }
        Commands::History { file } => handlers::handle_history(file),
    }
}
