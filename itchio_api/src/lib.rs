mod client;
mod errors;
mod query;
mod user_agent;
pub use self::client::{Client, REQUEST_TIMEOUT, SITE_URL};
pub use self::errors::Error;
pub use self::query::{query_url, Query, SearchQuery};

/// Domain token identifying marketplace URLs.
pub const DOMAIN: &str = "itch.io";
