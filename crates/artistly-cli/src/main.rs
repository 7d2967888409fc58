use anyhow::Result;
use artistly_core::model::Role;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

use commands::artists::SearchArgs;
use commands::auth::{SignInArgs, SignUpArgs};
use commands::dashboard::AddArtistArgs;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "artistly", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Artist catalog JSON (default: the bundled catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Session store file (default: ~/.local/share/artistly/session.json)
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Find artists
    ///
    /// Narrows the catalog to artists matching every given criterion:
    ///
    /// - SEARCH is looked for in name, bio and location, ignoring case
    /// - --category may be repeated; an artist in any of them matches
    /// - --location is looked for in the artist's location, ignoring case
    /// - --price selects a fee band: 0-500, 500-1000, 1000-2000, 2000-5000, 5000+
    ///
    /// Artists whose fee is not a number (e.g. "Negotiable") only drop out
    /// when --price is given. Results keep catalog order.
    Artists {
        /// Text to look for in name, bio, or location
        search: Option<String>,

        /// Category id (singers, djs, dancers, speakers); repeatable
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// City or state
        #[arg(short, long)]
        location: Option<String>,

        /// Price bucket (0-500, 500-1000, 1000-2000, 2000-5000, 5000+)
        #[arg(short, long)]
        price: Option<String>,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,

        /// Show bios and languages
        #[arg(long)]
        detailed: bool,
    },
    /// List artist categories
    Categories,
    /// Create an account (mock, stored locally) and sign in
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
        /// event-planner or artist-manager
        #[arg(long)]
        role: Option<Role>,
    },
    /// Sign in to an existing account
    Signin {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign out
    Signout,
    /// Show the signed-in user
    Whoami,
    /// Show the navigation menu for the signed-in user
    Nav,
    /// Submit an artist application
    Onboard {
        /// Application JSON (artistName, bio, categories, languages, feeRange, location)
        #[arg(long)]
        file: Option<PathBuf>,

        /// List the accepted categories, languages and fee ranges
        #[arg(long)]
        options: bool,
    },
    /// Manager dashboard (artist managers only)
    Dashboard {
        #[command(subcommand)]
        action: Option<DashboardAction>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum DashboardAction {
    /// Summary figures (default)
    Stats,
    /// Every artist on the roster
    Roster,
    /// Recent bookings
    Bookings,
    /// Add an artist to the roster for this run
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        bio: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        price_range: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one configuration value
    Get {
        /// catalog_path, categories_path, session_path, or log_level
        key: String,
    },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(verbose: u8, default_level: &str) {
    let level = match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?.with_overrides(cli.catalog, cli.session);
    init_logging(cli.verbose, &config.log_level);

    match cli.command {
        Commands::Artists {
            search,
            categories,
            location,
            price,
            json,
            detailed,
        } => {
            let catalog = commands::load_catalog(&config)?;
            commands::artists::search_artists(
                &catalog,
                &SearchArgs {
                    search,
                    categories,
                    location,
                    price,
                    json,
                    detailed,
                },
            )?;
        }
        Commands::Categories => {
            let catalog = commands::load_catalog(&config)?;
            commands::categories::list_categories(&catalog);
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
            role,
        } => {
            commands::auth::sign_up(
                &config,
                SignUpArgs {
                    name,
                    email,
                    password,
                    confirm_password,
                    role,
                },
            )?;
        }
        Commands::Signin { email, password } => {
            commands::auth::sign_in(&config, SignInArgs { email, password })?;
        }
        Commands::Signout => commands::auth::sign_out(&config)?,
        Commands::Whoami => commands::auth::who_am_i(&config)?,
        Commands::Nav => commands::auth::show_navigation(&config)?,
        Commands::Onboard { file, options } => {
            if options {
                commands::onboard::show_options();
            } else if let Some(file) = file {
                commands::onboard::submit_application(&file)?;
            } else {
                anyhow::bail!(
                    "Pass --file application.json to apply, or --options to see accepted values"
                );
            }
        }
        Commands::Dashboard { action } => {
            let catalog = commands::load_catalog(&config)?;
            let mut dashboard = commands::dashboard::open(&config, &catalog)?;
            match action.unwrap_or(DashboardAction::Stats) {
                DashboardAction::Stats => commands::dashboard::show_stats(&dashboard),
                DashboardAction::Roster => commands::dashboard::show_roster(&dashboard),
                DashboardAction::Bookings => commands::dashboard::show_bookings(&dashboard),
                DashboardAction::Add {
                    name,
                    category,
                    bio,
                    location,
                    price_range,
                } => commands::dashboard::add_artist(
                    &mut dashboard,
                    AddArtistArgs {
                        name,
                        category,
                        bio,
                        location,
                        price_range,
                    },
                )?,
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Get { key } => commands::config::get_config(&config, &key)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
