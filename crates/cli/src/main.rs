mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use guestbook_core::constants::DEFAULT_BIND_HOST;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Guestbook demo service backed by Redis or process memory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server on port 3000 (default)
    Serve {
        #[arg(short = 'H', long, default_value = DEFAULT_BIND_HOST)]
        host: String,
    },
    /// Print the resolved configuration as JSON and exit
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host }) => commands::serve::run(host).await?,
        None => commands::serve::run(DEFAULT_BIND_HOST.to_owned()).await?,
        Some(Commands::Config) => commands::config::run()?,
    }

    Ok(())
}
