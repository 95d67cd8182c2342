pub mod http_client;
pub mod platform;
pub mod resilient_api;

pub use http_client::HttpApiAdapter;
pub use resilient_api::{ResilientApi, RetryConfig};
