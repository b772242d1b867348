//! SocialPulse CLI binary.
//!
//! Opens the post generation form in the terminal. Logs go to a file
//! because the form owns the screen.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, launch_form, load_config};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_file = match cli.log_file.clone() {
        Some(path) => path,
        None => socialpulse::default_log_path()
            .ok_or("no cache directory on this platform; pass --log-file")?,
    };
    socialpulse::init_file_logging(&log_file, cli.verbose)?;

    // Credentials may come from .env
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env loaded"),
    }

    let config = load_config(&cli)?;
    launch_form(&config).await?;

    Ok(())
}
