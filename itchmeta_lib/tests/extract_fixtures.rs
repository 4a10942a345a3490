use chrono::NaiveDate;
use itchmeta_lib::{extract_html, parse_search_results, Link, MetadataField, SUPPORTED_FIELDS};

const GAME_URL: &str = "https://driftwood.itch.io/lantern-keeper";

fn game_page() -> &'static str {
    include_str!("fixtures/game_page.html")
}

fn search_page() -> String {
    include_str!("fixtures/search_results.html").to_string()
}

// ============================================================================
// Game page
// ============================================================================

#[test]
fn game_page_scalar_fields() {
    let record = extract_html(game_page(), GAME_URL);

    assert_eq!(record.name.as_deref(), Some("Lantern Keeper"));
    assert_eq!(record.developers, vec!["Driftwood Studio"]);
    assert_eq!(record.publishers, vec!["Driftwood Studio"]);
    assert_eq!(record.release_date, NaiveDate::from_ymd_opt(2023, 11, 14));
    assert_eq!(record.community_score, Some(92));
    assert_eq!(
        record.cover_image_url.as_deref(),
        Some("https://img.itch.zone/aW1nLzEyMzQ1Ni5wbmc=/315x250%23c/cover.png")
    );
    assert_eq!(record.source_url.as_deref(), Some(GAME_URL));
}

#[test]
fn game_page_description_is_plain_text() {
    let record = extract_html(game_page(), GAME_URL);
    let description = record.description.unwrap();

    assert!(description.starts_with("About\n"));
    assert!(description.contains("through a long night & guide the ships home."));
    assert!(description.contains("• Hand-drawn pixel art"));
    assert!(description.contains("• Three endings"));
    assert!(!description.contains('<'));
    assert!(!description.contains("\n\n\n"));
}

#[test]
fn game_page_taxonomy() {
    let record = extract_html(game_page(), GAME_URL);

    assert_eq!(record.tags, vec!["2D", "Atmospheric", "Pixel Art", "Roguelike"]);
    // The explicit genre row wins over inference from tags.
    assert_eq!(record.genres, vec!["Adventure", "Puzzle"]);
}

#[test]
fn game_page_screenshots() {
    let record = extract_html(game_page(), GAME_URL);

    assert_eq!(
        record.screenshots,
        vec![
            "https://img.itch.zone/aW1hZ2UvMS5wbmc=/original/shot1.png",
            "https://img.itch.zone/aW1hZ2UvMi5wbmc=/original/shot2.gif",
            "https://img.itch.zone/aW1hZ2UvMS5wbmc=/347x500/shot1.png",
            "https://img.itch.zone/aW1hZ2UvMy5wbmc=/347x500/shot3.jpg",
        ]
    );
    assert!(record.screenshots.iter().all(|s| s.starts_with("https://")));
    assert!(!record.screenshots.iter().any(|s| s.contains("/100x100")));
}

#[test]
fn game_page_links() {
    let record = extract_html(game_page(), GAME_URL);

    assert_eq!(
        record.links,
        vec![
            Link::new("itch.io", GAME_URL),
            Link::new("Developer Page", "https://driftwood.itch.io"),
            Link::new("Homepage", "https://driftwood.example.com"),
            Link::new("Twitter", "https://twitter.com/driftwoodgames"),
            Link::new("Discord", "https://discord.gg/driftwood"),
        ]
    );
}

#[test]
fn game_page_reports_every_field() {
    let record = extract_html(game_page(), GAME_URL);
    assert_eq!(record.available_fields(), SUPPORTED_FIELDS.to_vec());
}

#[test]
fn unrelated_page_degrades_to_source_link() {
    let html = "<html><head><title>Page not found</title></head><body><p>404</p></body></html>";
    let record = extract_html(html, GAME_URL);

    assert_eq!(record.name.as_deref(), Some("Page not found"));
    assert_eq!(record.description, None);
    assert!(record.tags.is_empty());
    assert!(record.genres.is_empty());
    assert_eq!(record.release_date, None);
    assert_eq!(record.community_score, None);
    assert_eq!(
        record.available_fields(),
        vec![MetadataField::Name, MetadataField::Links]
    );
}

// ============================================================================
// Search results page
// ============================================================================

#[test]
fn search_page_candidates() {
    let results = parse_search_results(&search_page(), 20, "https://itch.io");

    let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Lantern Keeper", "Lantern Festival", "Paper Lantern"]);

    assert_eq!(results[0].url, "https://itch.io/lantern-keeper");
    assert_eq!(results[0].author.as_deref(), Some("Driftwood Studio"));
    assert_eq!(
        results[0].description.as_deref(),
        Some("by Driftwood Studio - Keep the lighthouse burning")
    );
    assert_eq!(
        results[0].thumbnail_url.as_deref(),
        Some("https://img.itch.zone/lantern-keeper.png")
    );

    assert_eq!(results[1].description.as_deref(), Some("by Glowbug"));
    assert_eq!(
        results[1].thumbnail_url.as_deref(),
        Some("https://img.itch.zone/lantern-festival.png")
    );

    assert_eq!(results[2].author, None);
    assert_eq!(results[2].description.as_deref(), Some("A short folding puzzle"));
    assert_eq!(results[2].thumbnail_url, None);
}

#[test]
fn search_page_cap() {
    let results = parse_search_results(&search_page(), 2, "https://itch.io");
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].title, "Lantern Festival");
}
