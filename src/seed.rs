//! Seeding run: fetch (or fall back), create schema, populate, verify.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::db::{Store, Verification};
use crate::models::{DataOrigin, Dataset};
use crate::services::{DatasetSource, sample_dataset};

/// Steps a run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPhase {
    Start,
    Fetching,
    FetchSucceeded,
    FetchFailed,
    UsingSampleData,
    SchemaReady,
    Populating,
    Verifying,
    Done,
}

impl std::fmt::Display for SeedPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Fetching => "fetching",
            Self::FetchSucceeded => "fetch_succeeded",
            Self::FetchFailed => "fetch_failed",
            Self::UsingSampleData => "using_sample_data",
            Self::SchemaReady => "schema_ready",
            Self::Populating => "populating",
            Self::Verifying => "verifying",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a run. Database failures are recorded here rather than returned.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub origin: DataOrigin,
    pub phases: Vec<SeedPhase>,
    pub verification: Option<Verification>,
    pub error: Option<String>,
}

impl SeedReport {
    fn new() -> Self {
        Self {
            origin: DataOrigin::Api,
            phases: vec![SeedPhase::Start],
            verification: None,
            error: None,
        }
    }

    fn enter(&mut self, phase: SeedPhase) {
        tracing::debug!(%phase, "Seed phase");
        self.phases.push(phase);
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.verification.is_some_and(Verification::is_populated)
    }
}

/// Outermost context plus the root cause. Database errors repeat their inner
/// message at every layer, so the middle of the chain is skipped.
fn describe(e: &anyhow::Error) -> String {
    if e.chain().count() > 1 {
        format!("{e}: {}", e.root_cause())
    } else {
        e.to_string()
    }
}

pub struct Seeder {
    source: Option<Box<dyn DatasetSource>>,
    database_path: String,
}

impl Seeder {
    pub fn new(source: impl DatasetSource + 'static, database_path: impl Into<String>) -> Self {
        Self {
            source: Some(Box::new(source)),
            database_path: database_path.into(),
        }
    }

    /// A seeder that never touches the network and always writes the sample data.
    pub fn offline(database_path: impl Into<String>) -> Self {
        Self {
            source: None,
            database_path: database_path.into(),
        }
    }

    /// Fetches the live dataset, or returns the sample dataset if that fails.
    pub async fn acquire(&self) -> (Dataset, DataOrigin) {
        let Some(source) = &self.source else {
            info!("Offline mode, using sample data");
            return (sample_dataset(), DataOrigin::Sample);
        };

        match source.fetch().await {
            Ok(data) => (data, DataOrigin::Api),
            Err(e) => {
                error!("Error fetching data from API: {}", e);
                warn!("Failed to fetch data from API. Using sample data...");
                (sample_dataset(), DataOrigin::Sample)
            }
        }
    }

    /// Runs the whole sequence once.
    ///
    /// Only a failure to open the database is returned as an error. Schema,
    /// populate and verify failures are logged and land in the report.
    pub async fn run(&self) -> Result<SeedReport> {
        let mut report = SeedReport::new();
        info!("Initializing database at: {}", self.database_path);

        report.enter(SeedPhase::Fetching);
        let (data, origin) = self.acquire().await;
        report.origin = origin;
        match origin {
            DataOrigin::Api => report.enter(SeedPhase::FetchSucceeded),
            DataOrigin::Sample => {
                if self.source.is_some() {
                    report.enter(SeedPhase::FetchFailed);
                }
                report.enter(SeedPhase::UsingSampleData);
            }
        }

        let store = Store::open(&self.database_path).await?;
        let outcome = Self::load(&store, &data, &mut report).await;

        if let Err(e) = store.close().await {
            warn!("{:#}", e);
        }

        match outcome {
            Ok(verification) => {
                if verification.is_populated() {
                    info!("Database initialization completed successfully!");
                } else {
                    warn!("Database may not have been populated correctly.");
                }
                report.verification = Some(verification);
            }
            Err(e) => {
                let message = describe(&e);
                error!("Error during database initialization: {}", message);
                report.error = Some(message);
            }
        }

        report.enter(SeedPhase::Done);
        Ok(report)
    }

    async fn load(store: &Store, data: &Dataset, report: &mut SeedReport) -> Result<Verification> {
        store.initialize_schema().await?;
        report.enter(SeedPhase::SchemaReady);

        report.enter(SeedPhase::Populating);
        store.populate(data).await?;

        report.enter(SeedPhase::Verifying);
        store.verify().await
    }
}
