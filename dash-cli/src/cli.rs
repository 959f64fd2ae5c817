use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dash_core::{Config, Dashboard, SheCodesSource};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "City weather dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather API key and default city.
    Configure,

    /// Show the dashboard for a city (the configured default when omitted).
    Show {
        /// City name to search.
        city: Option<String>,

        /// Keep prompting for new cities after the first render.
        #[arg(short, long)]
        interactive: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, interactive } => show(city, interactive).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Weather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let default_city = inquire::Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    if !default_city.trim().is_empty() {
        config.default_city = default_city.trim().to_string();
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

/// City for the initial search: the trimmed argument when it has content,
/// otherwise the configured default. A blank argument is treated like none.
fn effective_city(arg: Option<String>, default_city: &str) -> String {
    arg.map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| default_city.to_string())
}

async fn show(city: Option<String>, interactive: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = SheCodesSource::from_config(&config)?;
    let mut dashboard = Dashboard::new(Arc::new(source));

    // Initial render: the requested city, or the configured default.
    let first = effective_city(city, &config.default_city);
    dashboard.submit_search(&first).await;
    render::dashboard(&dashboard);

    if interactive {
        loop {
            let input = inquire::Text::new("Enter a city...")
                .with_help_message("Press Esc to quit")
                .prompt_skippable()
                .context("Failed to read city")?;

            let Some(query) = input.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
            else {
                break;
            };

            dashboard.submit_search(&query).await;
            render::dashboard(&dashboard);
        }
    }

    Ok(())
}
