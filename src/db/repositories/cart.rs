use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Statement, TransactionTrait,
    Value,
};

use crate::entities::{carts, prelude::*};
use crate::models::Cart;

const REPLACE_CART: &str =
    "INSERT OR REPLACE INTO carts (id, user_id, date, products) VALUES (?, ?, ?, ?)";

/// Maps an API cart onto its table row. `userId` lands in `user_id` and the
/// line items are stored as a JSON array.
pub fn cart_row(cart: &Cart) -> Result<carts::Model> {
    let products = serde_json::to_string(&cart.products)
        .with_context(|| format!("Failed to encode line items for cart {}", cart.id))?;

    Ok(carts::Model {
        id: cart.id,
        user_id: cart.user_id,
        date: cart.date.clone(),
        products: Some(products),
    })
}

pub struct CartRepository {
    conn: DatabaseConnection,
}

impl CartRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts or replaces every cart by id, committing once at the end.
    pub async fn upsert_all(&self, items: &[Cart]) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let txn = self.conn.begin().await?;

        for cart in items {
            let row = cart_row(cart)?;
            let values: Vec<Value> = vec![
                row.id.into(),
                row.user_id.into(),
                row.date.into(),
                row.products.into(),
            ];

            txn.execute(Statement::from_sql_and_values(backend, REPLACE_CART, values))
                .await
                .with_context(|| format!("Failed to upsert cart {}", cart.id))?;
        }

        txn.commit().await.context("Failed to commit carts")?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Carts::find()
            .count(&self.conn)
            .await
            .context("Failed to count carts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;

    #[test]
    fn line_items_round_trip_through_text() {
        let cart = Cart {
            id: 2,
            user_id: Some(2),
            date: Some("2020-03-01T00:00:00.000Z".to_string()),
            products: vec![LineItem::new(3, 1), LineItem::new(4, 3)],
        };

        let row = cart_row(&cart).unwrap();
        assert_eq!(row.user_id, Some(2));

        let text = row.products.unwrap();
        assert_eq!(
            text,
            r#"[{"productId":3,"quantity":1},{"productId":4,"quantity":3}]"#
        );
        let decoded: Vec<LineItem> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, cart.products);
    }

    #[test]
    fn unknown_line_item_keys_survive_storage() {
        let raw = r#"[{"productId":1,"quantity":2,"_id":"x"}]"#;
        let cart = Cart {
            id: 1,
            user_id: Some(1),
            date: None,
            products: serde_json::from_str(raw).unwrap(),
        };

        let row = cart_row(&cart).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&row.products.unwrap()).unwrap();
        assert_eq!(stored, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn empty_line_items_encode_as_empty_array() {
        let cart = Cart {
            id: 5,
            user_id: None,
            date: None,
            products: Vec::new(),
        };

        let row = cart_row(&cart).unwrap();
        assert_eq!(row.products.as_deref(), Some("[]"));
        assert_eq!(row.user_id, None);
    }
}
