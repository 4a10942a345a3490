mod common;
pub use self::common::{query_url, Query};

mod search;
pub use self::search::SearchQuery;
