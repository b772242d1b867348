//! Form launch handler.

use super::Cli;
use socialpulse::{
    App, GeminiClient, SocialPulseConfig, SocialPulseResult, StyleTables, SystemClipboard, run_tui,
};
use std::sync::Arc;

/// Resolve configuration from the command line.
///
/// `--config` replaces the user file search; `--model` is applied last.
pub fn load_config(cli: &Cli) -> SocialPulseResult<SocialPulseConfig> {
    let config = match &cli.config {
        Some(path) => SocialPulseConfig::from_file(path)?,
        None => SocialPulseConfig::load()?,
    };
    let config = match &cli.model {
        Some(model) => config.with_model(model.clone()),
        None => config,
    };
    config.validate()?;
    Ok(config)
}

/// Open the form and run it until the user quits.
pub async fn launch_form(config: &SocialPulseConfig) -> SocialPulseResult<()> {
    tracing::info!(model = %config.gemini.model, "Launching form");

    let tables = Arc::new(StyleTables::new());
    let client = GeminiClient::from_env(&config.gemini, Arc::clone(&tables));
    let mut app = App::new(tables, &config.form, config.tui.copy_confirmation());
    let mut clipboard = SystemClipboard::new();

    run_tui(&mut app, Arc::new(client), &mut clipboard, config.tui.tick_rate()).await
}
