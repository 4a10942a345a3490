//! Library layer for itchmeta: game metadata harvested from itch.io pages.
//!
//! Field parsers turn loosely structured game pages into a
//! [`MetadataRecord`]; the [`MetadataProvider`] decides which page to read
//! from whatever the caller already knows, searching and asking a
//! [`CandidateChooser`] when needed.

pub mod cascade;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod provider;
pub mod resolve;
pub mod search;
pub mod text;
pub mod types;
pub mod urls;
pub mod validation;

pub use itchio_api;

pub use config::Settings;
pub use error::ItchMetaError;
pub use extract::{extract_html, extract_page, fetch_record};
pub use fetch::PageFetcher;
pub use provider::{
    CandidateChooser, Choice, GameData, Invocation, MetadataProvider, Outcome, RequestOptions,
};
pub use resolve::resolve_game_url;
pub use search::{parse_search_results, SearchClient};
pub use types::{Link, MetadataField, MetadataRecord, SearchCandidate, SUPPORTED_FIELDS};
