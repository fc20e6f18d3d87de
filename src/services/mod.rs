pub mod fetcher;
pub use fetcher::{DatasetSource, FetchError, StoreApiClient};

pub mod sample;
pub use sample::sample_dataset;
