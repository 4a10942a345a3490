use anyhow::Result;
use clap::Args;
use itchmeta_lib::fetch_record;
use itchmeta_lib::itchio_api::Client;
use itchmeta_lib::validation;

use crate::output::{format_fields, print_json, print_record_markdown, print_record_table, OutputFormat};

#[derive(Args)]
pub struct ExtractArgs {
    /// Game page URL (e.g. https://maddy.itch.io/celeste)
    pub url: String,
}

pub async fn run(args: &ExtractArgs, format: &OutputFormat) -> Result<()> {
    let url = validation::validate_page_url(&args.url)?;

    let client = Client::new()?;
    let record = fetch_record(&client, &url).await?;

    eprintln!("Available fields: {}", format_fields(&record.available_fields()));

    match format {
        OutputFormat::Table => print_record_table(&record),
        OutputFormat::Json => print_json(&record),
        OutputFormat::Markdown => print_record_markdown(&record),
    }

    Ok(())
}
