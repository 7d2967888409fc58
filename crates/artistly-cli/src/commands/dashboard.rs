use anyhow::Result;
use artistly_core::dashboard::{Dashboard, NewArtist};
use artistly_core::format::format_price_range;
use artistly_core::session::SessionContext;
use artistly_core::Catalog;

use super::{open_store, report};
use crate::config::Config;

#[derive(Debug)]
pub struct AddArtistArgs {
    pub name: String,
    pub category: String,
    pub bio: String,
    pub location: String,
    pub price_range: String,
}

pub fn open(config: &Config, catalog: &Catalog) -> Result<Dashboard> {
    let session = SessionContext::new(open_store(config)?);
    Ok(Dashboard::open(&session, catalog)?)
}

pub fn show_stats(dashboard: &Dashboard) {
    let stats = dashboard.stats();
    println!("\n📊 Dashboard for {}\n", dashboard.manager().name);
    println!("  Total artists:      {}", stats.total_artists);
    println!("  Active bookings:    {}", stats.active_bookings);
    println!("  Confirmed revenue:  ${}", stats.revenue);
    println!("  Average rating:     {:.1}", stats.average_rating);
}

pub fn show_roster(dashboard: &Dashboard) {
    println!("Roster ({} artists)\n", dashboard.roster().len());
    for artist in dashboard.roster() {
        println!(
            "  #{:<3} {:<22} {:<8} {:<20} {}",
            artist.id.get(),
            artist.name,
            artist.category.display_name(),
            artist.location,
            format_price_range(artist.price_range.as_str())
        );
    }
}

pub fn show_bookings(dashboard: &Dashboard) {
    println!("Recent bookings\n");
    for booking in dashboard.recent_bookings() {
        println!(
            "  {} {:<20} {:<22} {:<10} ${}",
            booking.date,
            booking.artist,
            booking.event,
            booking.status.to_string(),
            booking.amount
        );
    }
}

pub fn add_artist(dashboard: &mut Dashboard, args: AddArtistArgs) -> Result<()> {
    let new = NewArtist {
        name: args.name,
        category: args.category,
        bio: args.bio,
        location: args.location,
        price_range: args.price_range,
    };
    let artist = dashboard.add_artist(new).map_err(report)?;
    println!(
        "✓ Added #{} {} ({}) to this run's roster",
        artist.id,
        artist.name,
        artist.category.display_name()
    );
    println!("  The catalog file is not modified.");
    show_stats(dashboard);
    Ok(())
}
