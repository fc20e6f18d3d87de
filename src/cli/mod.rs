//! Command-line arguments. Every flag is optional; a bare invocation seeds
//! the default database from the default API.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Seed a local SQLite database from the Fake Store API
#[derive(Debug, Default, Parser)]
#[command(name = "storeseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the store API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the SQLite database path
    #[arg(long, value_name = "PATH")]
    pub database: Option<String>,

    /// Skip the API and write the built-in sample data
    #[arg(long)]
    pub offline: bool,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };

        if let Some(url) = &self.base_url {
            config.api.base_url.clone_from(url);
        }
        if let Some(path) = &self.database {
            config.general.database_path.clone_from(path);
        }

        config.validate()?;
        Ok(config)
    }
}
