//! Records exchanged between the extraction engine and its callers.

use chrono::NaiveDate;
use serde::Serialize;

/// A named outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One cell of a search-results page.
///
/// `description` already carries the `by <author>` prefix when an author was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCandidate {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
}

/// Metadata harvested from one game page.
///
/// Built once by the page extractor and never modified afterwards.
/// `Default` is the empty record used for "no matching listing".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub name: Option<String>,
    /// Plain text, HTML already stripped.
    pub description: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub release_date: Option<NaiveDate>,
    pub cover_image_url: Option<String>,
    /// Absolute URLs, no duplicates.
    pub screenshots: Vec<String>,
    /// Deduplicated by URL; the first entry names the source page.
    pub links: Vec<Link>,
    /// Always within 0..=100.
    pub community_score: Option<u8>,
    pub source_url: Option<String>,
}

impl MetadataRecord {
    /// True when no attribute is populated.
    pub fn is_empty(&self) -> bool {
        self.available_fields().is_empty()
    }

    /// Fields whose underlying value is non-empty, in [`SUPPORTED_FIELDS`] order.
    pub fn available_fields(&self) -> Vec<MetadataField> {
        SUPPORTED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.has_field(*field))
            .collect()
    }

    pub fn has_field(&self, field: MetadataField) -> bool {
        match field {
            MetadataField::Name => non_empty(&self.name),
            MetadataField::Description => non_empty(&self.description),
            MetadataField::Developers => !self.developers.is_empty(),
            MetadataField::Publishers => !self.publishers.is_empty(),
            MetadataField::Genres => !self.genres.is_empty(),
            MetadataField::Tags => !self.tags.is_empty(),
            MetadataField::ReleaseDate => self.release_date.is_some(),
            MetadataField::CoverImage => non_empty(&self.cover_image_url),
            MetadataField::BackgroundImage => !self.screenshots.is_empty(),
            MetadataField::Links => !self.links.is_empty(),
            MetadataField::CommunityScore => self.community_score.is_some(),
        }
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Attributes a metadata record can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Name,
    Description,
    Developers,
    Publishers,
    Genres,
    Tags,
    ReleaseDate,
    CoverImage,
    BackgroundImage,
    Links,
    CommunityScore,
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Developers => "developers",
            Self::Publishers => "publishers",
            Self::Genres => "genres",
            Self::Tags => "tags",
            Self::ReleaseDate => "release date",
            Self::CoverImage => "cover image",
            Self::BackgroundImage => "background image",
            Self::Links => "links",
            Self::CommunityScore => "community score",
        };
        f.write_str(label)
    }
}

pub const SUPPORTED_FIELDS: &[MetadataField] = &[
    MetadataField::Name,
    MetadataField::Description,
    MetadataField::Developers,
    MetadataField::Publishers,
    MetadataField::Genres,
    MetadataField::Tags,
    MetadataField::ReleaseDate,
    MetadataField::CoverImage,
    MetadataField::BackgroundImage,
    MetadataField::Links,
    MetadataField::CommunityScore,
];
