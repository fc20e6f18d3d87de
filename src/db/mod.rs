use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::models::Dataset;

pub mod migrator;
pub mod repositories;

use repositories::cart::CartRepository;
use repositories::product::ProductRepository;
use repositories::user::UserRepository;

/// Row counts read back after a populate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub products: u64,
    pub users: u64,
    pub carts: u64,
}

impl Verification {
    /// Products and users must both be present; carts are informational.
    #[must_use]
    pub const fn is_populated(self) -> bool {
        self.products > 0 && self.users > 0
    }
}

/// The single SQLite connection a seeding run writes through.
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    /// Opens (creating if needed) the database file at `path`.
    ///
    /// `:memory:` opens a private in-memory database.
    pub async fn open(path: &str) -> Result<Self> {
        let db_url = if path == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            let file = Path::new(path);
            if let Some(parent) = file.parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            if !file.exists() {
                std::fs::File::create(file)
                    .with_context(|| format!("Failed to create database file {path}"))?;
            }
            format!("sqlite:{path}")
        };

        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .with_context(|| format!("Failed to open database at {path}"))?;

        info!("Database connected at {}", path);

        Ok(Self { conn })
    }

    fn product_repo(&self) -> ProductRepository {
        ProductRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.conn.clone())
    }

    fn cart_repo(&self) -> CartRepository {
        CartRepository::new(self.conn.clone())
    }

    /// Creates the products, users and carts tables if they are missing.
    pub async fn initialize_schema(&self) -> Result<()> {
        use sea_orm_migration::MigratorTrait;

        migrator::Migrator::up(&self.conn, None)
            .await
            .context("Failed to create database schema")?;

        // sqlx opens SQLite connections with enforcement on;
        // carts.user_id -> users.id is declarative only.
        self.conn
            .execute_unprepared("PRAGMA foreign_keys = OFF")
            .await
            .context("Failed to configure foreign key enforcement")?;

        info!("Database schema created successfully");
        Ok(())
    }

    /// Upserts the whole dataset, one committed transaction per table.
    pub async fn populate(&self, data: &Dataset) -> Result<()> {
        info!("Inserting products...");
        self.product_repo().upsert_all(&data.products).await?;

        info!("Inserting users...");
        self.user_repo().upsert_all(&data.users).await?;

        info!("Inserting carts...");
        self.cart_repo().upsert_all(&data.carts).await?;

        info!("Database populated successfully");
        Ok(())
    }

    pub async fn verify(&self) -> Result<Verification> {
        let products = self.product_repo().count().await?;
        info!("Products in database: {}", products);

        let users = self.user_repo().count().await?;
        info!("Users in database: {}", users);

        let carts = self.cart_repo().count().await?;
        info!("Carts in database: {}", carts);

        Ok(Verification {
            products,
            users,
            carts,
        })
    }

    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .context("Failed to close database connection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carts_do_not_count_towards_success() {
        let no_carts = Verification {
            products: 1,
            users: 1,
            carts: 0,
        };
        assert!(no_carts.is_populated());

        let no_users = Verification {
            products: 6,
            users: 0,
            carts: 3,
        };
        assert!(!no_users.is_populated());

        let no_products = Verification {
            products: 0,
            users: 3,
            carts: 3,
        };
        assert!(!no_products.is_populated());
    }

    #[tokio::test]
    async fn schema_initialization_is_repeatable() {
        let store = Store::open(":memory:").await.unwrap();
        store.initialize_schema().await.unwrap();
        store.initialize_schema().await.unwrap();

        let counts = store.verify().await.unwrap();
        assert_eq!(
            counts,
            Verification {
                products: 0,
                users: 0,
                carts: 0
            }
        );
        store.close().await.unwrap();
    }
}
