use anyhow::{Context, Result};
use artistly_core::format::{format_price_range, truncate_text};
use artistly_core::model::ArtistRecord;
use artistly_core::Catalog;
use artistly_search::{filter, PriceBucket, Query};

const BIO_PREVIEW_CHARS: usize = 120;

#[derive(Debug, Default)]
pub struct SearchArgs {
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub location: Option<String>,
    pub price: Option<String>,
    pub json: bool,
    pub detailed: bool,
}

fn build_query(catalog: &Catalog, args: &SearchArgs) -> Result<Query> {
    let mut query = Query::new()
        .with_search_term(args.search.clone().unwrap_or_default())
        .with_location(args.location.clone().unwrap_or_default())
        .with_category_ids(catalog.categories(), &args.categories)?;

    if let Some(price) = &args.price {
        query = query.with_price_bucket_id(price);
        if query.price_bucket.is_none() {
            let valid: Vec<_> = PriceBucket::ALL.iter().map(|b| b.id()).collect();
            log::warn!(
                "Unknown price bucket '{}', showing all prices (valid: {})",
                price,
                valid.join(", ")
            );
        }
    }

    Ok(query)
}

/// Up to two languages, then a "+N" count of the rest.
fn language_summary(languages: &[String]) -> String {
    let shown = languages
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    match languages.len() {
        n if n > 2 => format!("{shown} +{}", n - 2),
        _ => shown,
    }
}

fn summary_line(artist: &ArtistRecord) -> String {
    format!(
        "#{:<3} {} | {} | {} | {} | {:.1} ({} reviews)",
        artist.id.get(),
        artist.name,
        artist.category.display_name(),
        artist.location,
        format_price_range(artist.price_range.as_str()),
        artist.rating,
        artist.review_count
    )
}

pub fn search_artists(catalog: &Catalog, args: &SearchArgs) -> Result<()> {
    let query = build_query(catalog, args)?;
    let results = filter(catalog.artists(), &query);

    if args.json {
        let json = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{json}");
        return Ok(());
    }

    let count = results.len();
    println!("{count} artist{} found", if count == 1 { "" } else { "s" });

    if results.is_empty() {
        println!("\nNo artists found");
        println!("Try adjusting your search criteria or filters");
        return Ok(());
    }

    println!();
    for artist in results {
        println!("{}", summary_line(artist));
        if args.detailed {
            println!("     {}", truncate_text(&artist.bio, BIO_PREVIEW_CHARS));
            println!("     Languages: {}", language_summary(&artist.languages));
        }
    }

    Ok(())
}
