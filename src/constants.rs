pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

pub const DEFAULT_DATABASE_PATH: &str = "resources/test_database.db";

pub mod timeouts {
    /// Per-request limit for each of the three collection fetches.
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

pub mod collections {
    pub const PRODUCTS: &str = "products";

    pub const USERS: &str = "users";

    pub const CARTS: &str = "carts";
}
