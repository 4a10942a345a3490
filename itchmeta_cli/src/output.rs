use itchmeta_lib::{MetadataField, MetadataRecord, Outcome, SearchCandidate};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Everything `lookup` reports, as one JSON document.
#[derive(Serialize)]
pub struct LookupReport<'a> {
    pub outcome: Outcome,
    pub available_fields: Vec<MetadataField>,
    pub background_image: Option<&'a str>,
    pub record: &'a MetadataRecord,
}

const MAX_DESCRIPTION_CHARS: usize = 200;

// -- Row builders --

fn build_candidate_rows(candidates: &[SearchCandidate]) -> Vec<CandidateRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| CandidateRow {
            index: i + 1,
            title: c.title.clone(),
            author: c.author.clone().unwrap_or_default(),
            url: c.url.clone(),
        })
        .collect()
}

fn build_record_rows(record: &MetadataRecord) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    let mut push = |field: &str, value: String| {
        if !value.is_empty() {
            rows.push(FieldRow {
                field: field.to_string(),
                value,
            });
        }
    };

    push("Name", record.name.clone().unwrap_or_default());
    push(
        "Description",
        record
            .description
            .as_deref()
            .map(|d| truncate(d, MAX_DESCRIPTION_CHARS))
            .unwrap_or_default(),
    );
    push("Developers", record.developers.join(", "));
    push("Publishers", record.publishers.join(", "));
    push("Genres", record.genres.join(", "));
    push("Tags", record.tags.join(", "));
    push(
        "Release date",
        record
            .release_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    push("Cover image", record.cover_image_url.clone().unwrap_or_default());
    push("Screenshots", record.screenshots.join("\n"));
    push(
        "Links",
        record
            .links
            .iter()
            .map(|l| format!("{}: {}", l.name, l.url))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    push(
        "Community score",
        record
            .community_score
            .map(|s| format!("{}/100", s))
            .unwrap_or_default(),
    );
    push("Source", record.source_url.clone().unwrap_or_default());
    rows
}

/// Cuts to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", text[..end].trim_end()),
        None => text.to_string(),
    }
}

pub fn format_fields(fields: &[MetadataField]) -> String {
    if fields.is_empty() {
        return "none".to_string();
    }
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// -- Table output --

pub fn print_candidates_table(candidates: &[SearchCandidate]) {
    println!("{}", Table::new(build_candidate_rows(candidates)));
}

pub fn print_record_table(record: &MetadataRecord) {
    println!("{}", Table::new(build_record_rows(record)));
}

// -- Markdown output --

pub fn print_candidates_markdown(candidates: &[SearchCandidate]) {
    let mut table = Table::new(build_candidate_rows(candidates));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_record_markdown(record: &MetadataRecord) {
    let mut table = Table::new(build_record_rows(record));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
