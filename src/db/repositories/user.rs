use anyhow::{Context, Result};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Statement, TransactionTrait,
    Value,
};

use crate::entities::{prelude::*, users};
use crate::models::User;

// REPLACE also evicts rows that clash on email or username, not just id.
const REPLACE_USER: &str = "INSERT OR REPLACE INTO users \
    (id, email, username, password, name, phone, address) VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Maps an API user onto its table row.
///
/// The name object collapses into a single `"<first> <last>"` string and the
/// address object is stored as JSON text (`{}` when the API sent none).
pub fn user_row(user: &User) -> Result<users::Model> {
    let address = serde_json::to_string(&user.address.clone().unwrap_or_default())
        .with_context(|| format!("Failed to encode address for user {}", user.id))?;

    Ok(users::Model {
        id: user.id,
        email: user.email.clone(),
        username: user.username.clone(),
        password: user.password.clone(),
        name: Some(user.display_name()),
        phone: user.phone.clone(),
        address: Some(address),
    })
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts every user, replacing any row that clashes on a unique
    /// column, and commits once at the end.
    pub async fn upsert_all(&self, items: &[User]) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let txn = self.conn.begin().await?;

        for user in items {
            let row = user_row(user)?;
            let values: Vec<Value> = vec![
                row.id.into(),
                row.email.into(),
                row.username.into(),
                row.password.into(),
                row.name.into(),
                row.phone.into(),
                row.address.into(),
            ];

            txn.execute(Statement::from_sql_and_values(backend, REPLACE_USER, values))
                .await
                .with_context(|| format!("Failed to upsert user {}", user.id))?;
        }

        txn.commit().await.context("Failed to commit users")?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Users::find()
            .count(&self.conn)
            .await
            .context("Failed to count users")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, UserName};

    fn john() -> User {
        User {
            id: 1,
            email: "john@example.com".to_string(),
            username: "johnd".to_string(),
            password: Some("m38rmF$".to_string()),
            name: Some(UserName {
                firstname: Some("John".to_string()),
                lastname: Some("Doe".to_string()),
            }),
            phone: Some("1-570-236-7033".to_string()),
            address: Some(Address {
                city: Some("kilcoole".to_string()),
                street: Some("new road".to_string()),
                number: Some(7682.into()),
                zipcode: Some("12926-3874".into()),
                ..Address::default()
            }),
        }
    }

    #[test]
    fn name_and_address_are_flattened() {
        let row = user_row(&john()).unwrap();
        assert_eq!(row.name.as_deref(), Some("John Doe"));

        let decoded: Address = serde_json::from_str(row.address.as_deref().unwrap()).unwrap();
        assert_eq!(Some(decoded), john().address);
    }

    #[test]
    fn absent_name_and_address_use_empty_defaults() {
        let mut user = john();
        user.name = None;
        user.address = None;

        let row = user_row(&user).unwrap();
        assert_eq!(row.name.as_deref(), Some(" "));
        assert_eq!(row.address.as_deref(), Some("{}"));
    }
}
