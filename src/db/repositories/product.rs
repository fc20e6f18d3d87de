use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Statement, TransactionTrait,
    Value,
};

use crate::entities::{prelude::*, products};
use crate::models::Product;

const REPLACE_PRODUCT: &str = "INSERT OR REPLACE INTO products \
    (id, title, price, category, description, image) VALUES (?, ?, ?, ?, ?, ?)";

/// Maps an API product onto its table row, field for field.
#[must_use]
pub fn product_row(product: &Product) -> products::Model {
    products::Model {
        id: product.id,
        title: product.title.clone(),
        price: product.price,
        category: product.category.clone(),
        description: product.description.clone(),
        image: product.image.clone(),
    }
}

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts every product, replacing any row that clashes on a unique
    /// column, and commits once at the end.
    pub async fn upsert_all(&self, items: &[Product]) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let txn = self.conn.begin().await?;

        for product in items {
            let row = product_row(product);
            let values: Vec<Value> = vec![
                row.id.into(),
                row.title.into(),
                row.price.into(),
                row.category.into(),
                row.description.into(),
                row.image.into(),
            ];

            txn.execute(Statement::from_sql_and_values(
                backend,
                REPLACE_PRODUCT,
                values,
            ))
            .await
            .with_context(|| format!("Failed to upsert product {}", product.id))?;
        }

        txn.commit()
            .await
            .context("Failed to commit products")?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Products::find()
            .count(&self.conn)
            .await
            .context("Failed to count products")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_become_null() {
        let product = Product {
            id: 4,
            title: "Mens Casual Slim Fit".to_string(),
            price: 15.99,
            category: "men's clothing".to_string(),
            description: None,
            image: None,
        };

        let row = product_row(&product);
        assert_eq!(row.id, 4);
        assert!((row.price - 15.99).abs() < f64::EPSILON);
        assert_eq!(row.description, None);
        assert_eq!(row.image, None);
    }
}
