use anyhow::{anyhow, Result};
use clap::Args;
use itchmeta_lib::itchio_api::Client;
use itchmeta_lib::validation;
use itchmeta_lib::{
    GameData, Invocation, Link, MetadataProvider, MetadataRecord, PageFetcher, RequestOptions,
    Settings,
};

use crate::output::{
    format_fields, print_json, print_record_markdown, print_record_table, LookupReport,
    OutputFormat,
};
use crate::prompt::StdinChooser;

#[derive(Args)]
pub struct LookupArgs {
    /// Game name to search for when no page URL can be derived
    #[arg(long)]
    pub name: Option<String>,

    /// Existing link for the game (repeatable)
    #[arg(long = "link")]
    pub links: Vec<String>,

    /// Identifier from the game's data source (a URL or slug)
    #[arg(long)]
    pub game_id: Option<String>,

    /// Name of the data source the identifier came from (e.g. itch.io)
    #[arg(long)]
    pub source: Option<String>,

    /// Description the game already has
    #[arg(long)]
    pub description: Option<String>,

    /// Ask on the terminal when a search returns several games
    #[arg(long)]
    pub interactive: bool,

    /// Take the first search result in background mode
    #[arg(long)]
    pub prefer_first: bool,

    /// Maximum number of search results (1-100)
    #[arg(long)]
    pub max_results: Option<u32>,
}

pub async fn run(args: &LookupArgs, mut settings: Settings, format: &OutputFormat) -> Result<()> {
    if args.prefer_first {
        settings.prefer_first_search_result = true;
    }
    if let Some(max) = args.max_results {
        settings.max_search_results = validation::validate_max_results(max)?;
    }
    settings
        .verify()
        .map_err(|errors| anyhow!("invalid settings: {}", errors.join("; ")))?;

    let name = match args.name.as_deref() {
        Some(name) => Some(validation::validate_search(name)?),
        None => None,
    };
    let options = RequestOptions {
        game: GameData {
            name,
            description: args.description.clone(),
            links: args
                .links
                .iter()
                .map(|url| Link::new("Link", url.trim()))
                .collect(),
            game_id: args.game_id.clone(),
            source: args.source.clone(),
        },
        invocation: if args.interactive {
            Invocation::Interactive
        } else {
            Invocation::Background
        },
    };

    let client = Client::new()?;
    let mut provider = MetadataProvider::new(options, settings, client);
    if args.interactive {
        provider = provider.with_chooser(StdinChooser);
    }

    let record = harvested_view(&provider).await;
    let outcome = provider.outcome().await;
    let available_fields = provider.available_fields().await;
    let background_image = provider.background_image().await;

    eprintln!("Outcome: {}", outcome);
    eprintln!("Available fields: {}", format_fields(&available_fields));

    match format {
        OutputFormat::Json => print_json(&LookupReport {
            outcome,
            available_fields,
            background_image,
            record: &record,
        }),
        OutputFormat::Table => {
            print_record_table(&record);
            if let Some(url) = background_image {
                println!("Background image: {}", url);
            }
        }
        OutputFormat::Markdown => {
            print_record_markdown(&record);
            if let Some(url) = background_image {
                println!("\nBackground image: {}", url);
            }
        }
    }

    Ok(())
}

/// The record as the caller sees it through the provider's accessors, with
/// the description preference and screenshot switch applied.
async fn harvested_view<F: PageFetcher>(provider: &MetadataProvider<F>) -> MetadataRecord {
    let cached = provider.record().await;
    MetadataRecord {
        name: provider.name().await.map(str::to_string),
        description: provider.description().await.map(str::to_string),
        developers: provider.developers().await.to_vec(),
        publishers: provider.publishers().await.to_vec(),
        genres: provider.genres().await.to_vec(),
        tags: provider.tags().await.to_vec(),
        release_date: provider.release_date().await,
        cover_image_url: provider.cover_image().await.map(str::to_string),
        screenshots: provider.screenshots().await.to_vec(),
        links: provider.links().await.to_vec(),
        community_score: provider.community_score().await,
        source_url: cached.source_url.clone(),
    }
}
