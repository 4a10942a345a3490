//! Resolution orchestrator: from the caller's data to one cached record.
//!
//! A [`MetadataProvider`] serves one request. The first accessor call
//! resolves a page URL (directly, or through search and disambiguation),
//! extracts it, and caches the record; later calls read the cache.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::config::Settings;
use crate::dom::Document;
use crate::extract::extract_page;
use crate::fetch::{fetch_document, PageFetcher};
use crate::resolve::resolve_game_url;
use crate::search::SearchClient;
use crate::types::{Link, MetadataField, MetadataRecord, SearchCandidate};

/// What the caller already knows about the game.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub links: Vec<Link>,
    pub game_id: Option<String>,
    /// Name of the data source `game_id` came from.
    pub source: Option<String>,
}

/// Whether a human is available to disambiguate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    #[default]
    Background,
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub game: GameData,
    pub invocation: Invocation,
}

/// A chooser's answer to one presentation of the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Index into the list that was presented.
    Pick(usize),
    /// Search again with new text and present the new results.
    Search(String),
    Cancel,
}

/// A human picking among search candidates. Only consulted for
/// [`Invocation::Interactive`] requests.
pub trait CandidateChooser: Send + Sync {
    fn choose(&self, candidates: &[SearchCandidate], query: &str) -> Choice;

    /// Picks the background image among screenshot URLs; `None` declines.
    fn choose_image(&self, images: &[String]) -> Option<usize> {
        (!images.is_empty()).then_some(0)
    }
}

/// How the cached record was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A page URL was derived from the caller's data; no search ran.
    Direct,
    SingleCandidate,
    /// Top of several candidates, taken without asking.
    FirstCandidate,
    /// Picked by the chooser.
    Chosen,
    /// No URL and no name to search for.
    NoQuery,
    NoCandidates,
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Direct => "resolved from existing data",
            Self::SingleCandidate => "single search result",
            Self::FirstCandidate => "first search result",
            Self::Chosen => "chosen from search results",
            Self::NoQuery => "nothing to search for",
            Self::NoCandidates => "no search results",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

struct Resolution {
    record: MetadataRecord,
    outcome: Outcome,
}

impl Resolution {
    fn empty(outcome: Outcome) -> Self {
        Self {
            record: MetadataRecord::default(),
            outcome,
        }
    }
}

/// Per-request metadata provider.
pub struct MetadataProvider<F> {
    options: RequestOptions,
    settings: Settings,
    fetcher: F,
    chooser: Option<Box<dyn CandidateChooser>>,
    resolved: OnceCell<Resolution>,
    background: OnceCell<Option<String>>,
}

impl<F: PageFetcher> MetadataProvider<F> {
    pub fn new(options: RequestOptions, settings: Settings, fetcher: F) -> Self {
        Self {
            options,
            settings,
            fetcher,
            chooser: None,
            resolved: OnceCell::new(),
            background: OnceCell::new(),
        }
    }

    pub fn with_chooser(mut self, chooser: impl CandidateChooser + 'static) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The cached record, resolving it on first use.
    pub async fn record(&self) -> &MetadataRecord {
        &self.ensure_resolved().await.record
    }

    pub async fn outcome(&self) -> Outcome {
        self.ensure_resolved().await.outcome
    }

    pub async fn name(&self) -> Option<&str> {
        self.record().await.name.as_deref()
    }

    /// The harvested description, unless the caller has one of their own
    /// and prefers to keep it.
    pub async fn description(&self) -> Option<&str> {
        let harvested = self
            .record()
            .await
            .description
            .as_deref()
            .filter(|d| !d.is_empty())?;
        let existing_empty = self
            .options
            .game
            .description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty());
        (self.settings.prefer_source_description || existing_empty).then_some(harvested)
    }

    pub async fn developers(&self) -> &[String] {
        &self.record().await.developers
    }

    pub async fn publishers(&self) -> &[String] {
        &self.record().await.publishers
    }

    pub async fn genres(&self) -> &[String] {
        &self.record().await.genres
    }

    pub async fn tags(&self) -> &[String] {
        &self.record().await.tags
    }

    pub async fn release_date(&self) -> Option<NaiveDate> {
        self.record().await.release_date
    }

    pub async fn cover_image(&self) -> Option<&str> {
        self.record().await.cover_image_url.as_deref()
    }

    /// Screenshot URLs; empty when screenshots are turned off.
    pub async fn screenshots(&self) -> &[String] {
        let record = self.record().await;
        if self.settings.download_screenshots {
            &record.screenshots
        } else {
            &[]
        }
    }

    /// First screenshot, or the chooser's pick for interactive requests.
    /// Asked at most once per request.
    pub async fn background_image(&self) -> Option<&str> {
        let screenshots = self.screenshots().await;
        self.background
            .get_or_init(|| async { self.pick_background(screenshots) })
            .await
            .as_deref()
    }

    fn pick_background(&self, screenshots: &[String]) -> Option<String> {
        let first = screenshots.first()?;
        let chooser = match (self.options.invocation, &self.chooser) {
            (Invocation::Interactive, Some(chooser)) => chooser,
            _ => return Some(first.clone()),
        };
        match chooser.choose_image(screenshots) {
            Some(i) => screenshots.get(i).cloned(),
            None => {
                tracing::info!("Background image declined");
                None
            }
        }
    }

    pub async fn links(&self) -> &[Link] {
        &self.record().await.links
    }

    pub async fn community_score(&self) -> Option<u8> {
        self.record().await.community_score
    }

    /// Fields this provider can answer with a value. The background image
    /// is left out when screenshots are turned off.
    pub async fn available_fields(&self) -> Vec<MetadataField> {
        let mut fields = self.record().await.available_fields();
        if !self.settings.download_screenshots {
            fields.retain(|f| *f != MetadataField::BackgroundImage);
        }
        fields
    }

    async fn ensure_resolved(&self) -> &Resolution {
        self.resolved.get_or_init(|| self.resolve()).await
    }

    async fn resolve(&self) -> Resolution {
        let game = &self.options.game;
        if let Some(url) =
            resolve_game_url(&game.links, game.game_id.as_deref(), game.source.as_deref())
        {
            tracing::info!("Using page {} from existing game data", url);
            return Resolution {
                record: self.extract(&url).await,
                outcome: Outcome::Direct,
            };
        }

        let Some(query) = game.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
            tracing::info!("No page URL and no name to search for");
            return Resolution::empty(Outcome::NoQuery);
        };

        let search = SearchClient::new(&self.fetcher);
        let limit = self.settings.search_limit();
        let candidates = search.search(query, limit).await;

        let (url, outcome) = match candidates.as_slice() {
            [] => {
                tracing::info!("No itch.io results for {:?}", query);
                return Resolution::empty(Outcome::NoCandidates);
            }
            [only] => (only.url.clone(), Outcome::SingleCandidate),
            [first, ..] => match (self.options.invocation, &self.chooser) {
                (Invocation::Interactive, Some(chooser)) => {
                    match self.disambiguate(chooser.as_ref(), candidates.clone(), query).await {
                        Some(url) => (url, Outcome::Chosen),
                        None => {
                            tracing::info!("Candidate selection cancelled");
                            return Resolution::empty(Outcome::Cancelled);
                        }
                    }
                }
                _ => {
                    tracing::info!(
                        "Taking first of {} results (prefer first: {})",
                        candidates.len(),
                        self.settings.prefer_first_search_result
                    );
                    (first.url.clone(), Outcome::FirstCandidate)
                }
            },
        };

        Resolution {
            record: self.extract(&url).await,
            outcome,
        }
    }

    /// Presents candidates until one is picked or the chooser cancels.
    async fn disambiguate(
        &self,
        chooser: &dyn CandidateChooser,
        mut candidates: Vec<SearchCandidate>,
        query: &str,
    ) -> Option<String> {
        let search = SearchClient::new(&self.fetcher);
        let mut query = query.to_string();
        loop {
            match chooser.choose(&candidates, &query) {
                Choice::Pick(i) => {
                    let picked = candidates.get(i);
                    if picked.is_none() {
                        tracing::warn!("Pick {} is out of range for {} candidates", i, candidates.len());
                    }
                    return picked.map(|c| c.url.clone());
                }
                Choice::Search(text) => {
                    candidates = search.search(&text, self.settings.search_limit()).await;
                    query = text;
                }
                Choice::Cancel => return None,
            }
        }
    }

    /// Fetches and extracts one page; a failed fetch gives the empty record.
    async fn extract(&self, url: &str) -> MetadataRecord {
        match fetch_document(&self.fetcher, url).await {
            Some(html) => extract_page(&Document::parse(&html), url),
            None => MetadataRecord::default(),
        }
    }
}
