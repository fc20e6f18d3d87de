//! Payload types decoded from the store API.
//!
//! These mirror the JSON shapes served under `/products`, `/users` and `/carts`.
//! Conversion into table rows lives in `db::repositories`.

pub mod cart;
pub mod product;
pub mod user;

use serde::{Deserialize, Serialize};

pub use cart::{Cart, LineItem};
pub use product::Product;
pub use user::{Address, User, UserName};

/// Everything a seeding run writes, whichever way it was obtained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub carts: Vec<Cart>,
}

impl Dataset {
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.products.len(), self.users.len(), self.carts.len())
    }
}

/// Where a [`Dataset`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Api,
    Sample,
}

impl std::fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Sample => write!(f, "sample"),
        }
    }
}
