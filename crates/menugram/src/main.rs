//! Menugram CLI binary.
//!
//! Generates restaurant posts, item stories, QR-scan posts and five-course
//! menu content from the command line.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, Studio, list_styles, run_menu, run_post, run_scan, run_story};

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let studio = Studio::from_cli(&cli)?;

    let result = match cli.command {
        Commands::Post(args) => run_post(&studio, args).await,
        Commands::Story(args) => run_story(&studio, args).await,
        Commands::Scan(args) => run_scan(&studio, args).await,
        Commands::Menu(args) => run_menu(&studio, args).await,
        Commands::Styles => list_styles(&studio),
    };

    if let Err(err) = result {
        if let Some(validation) = err.as_validation() {
            eprintln!("{}", validation.notice());
            std::process::exit(1);
        }
        return Err(err.into());
    }

    Ok(())
}
