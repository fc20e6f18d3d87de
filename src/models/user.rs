use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<UserName>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl User {
    /// `"<firstname> <lastname>"`, with an empty string for whichever part is missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        let (first, last) = self.name.as_ref().map_or(("", ""), |n| {
            (
                n.firstname.as_deref().unwrap_or(""),
                n.lastname.as_deref().unwrap_or(""),
            )
        });
        format!("{first} {last}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// Postal address as served by the API.
///
/// `number`, `zipcode` and `geolocation` take whatever JSON the source sends,
/// and keys this type does not know about are kept in `extra`, so the stored
/// blob decodes back to the object that was received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
