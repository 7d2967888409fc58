use anyhow::{Context, Result};
use artistly_core::model::Category;
use artistly_core::onboarding::{ArtistApplication, FEE_RANGES, LANGUAGES};
use std::path::Path;

use super::report;

/// Print the values the application form accepts.
pub fn show_options() {
    println!("Categories:");
    for category in Category::ALL {
        println!("  {:<9} {}", category.id(), category.display_name());
    }
    println!("\nLanguages:");
    println!("  {}", LANGUAGES.join(", "));
    println!("\nFee ranges:");
    for (value, label) in FEE_RANGES {
        println!("  {value:<11} {label}");
    }
}

/// Validate and submit an application read from a JSON file.
pub fn submit_application(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let application: ArtistApplication = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid application", path.display()))?;

    let submission = application.submit().map_err(report)?;

    println!("✓ Application received from {}", submission.application.artist_name);
    println!(
        "Thank you for joining Artistly! We'll review your application and get back to you \
         within 2-3 business days."
    );
    Ok(())
}
