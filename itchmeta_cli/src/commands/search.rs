use anyhow::Result;
use clap::Args;
use itchmeta_lib::itchio_api::Client;
use itchmeta_lib::validation;
use itchmeta_lib::{SearchClient, Settings};

use crate::output::{print_candidates_markdown, print_candidates_table, print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search query
    pub query: String,

    /// Maximum number of results (1-100); defaults to the configured value
    #[arg(long)]
    pub max: Option<u32>,
}

pub async fn run(args: &SearchArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let query = validation::validate_search(&args.query)?;
    let max = match args.max {
        Some(max) => validation::validate_max_results(max)?,
        None => settings.search_limit(),
    };

    let client = Client::new()?;
    let results = SearchClient::new(&client).search(&query, max).await;

    eprintln!("{} results for {:?}", results.len(), query);

    match format {
        OutputFormat::Table => print_candidates_table(&results),
        OutputFormat::Json => print_json(&results),
        OutputFormat::Markdown => print_candidates_markdown(&results),
    }

    Ok(())
}
