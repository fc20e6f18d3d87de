pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod seed;
pub mod services;

pub use cli::Cli;
pub use config::Config;
pub use seed::{SeedPhase, SeedReport, Seeder};

use services::StoreApiClient;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let mut log_level = config.general.log_level.clone();
    if config.general.suppress_connection_errors {
        log_level.push_str(",reqwest=off,hyper_util=off");
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = cli.load_config()?;
    init_tracing(&config);

    let seeder = if cli.offline {
        Seeder::offline(config.general.database_path.clone())
    } else {
        match StoreApiClient::new(&config.api.base_url, config.api.timeout()) {
            Ok(client) => Seeder::new(client, config.general.database_path.clone()),
            Err(e) => {
                tracing::error!("{}", e);
                Seeder::offline(config.general.database_path.clone())
            }
        }
    };

    let report = seeder.run().await?;
    tracing::debug!(origin = %report.origin, succeeded = report.succeeded(), "Seed run finished");

    Ok(())
}
