use anyhow::Result;

use crate::config::{self, Config};

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| String::from("<bundled>"), |p| p.display().to_string())
}

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  catalog_path: {}", display_path(config.catalog_path.as_deref()));
    println!(
        "  categories_path: {}",
        display_path(config.categories_path.as_deref())
    );
    println!("  session_path: {}", config.session_path.display());
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (ARTISTLY_*) > Config file > Defaults");
}

/// Print a specific config value.
pub fn get_config(config: &Config, key: &str) -> Result<()> {
    match key {
        "catalog_path" => println!("{}", display_path(config.catalog_path.as_deref())),
        "categories_path" => println!("{}", display_path(config.categories_path.as_deref())),
        "session_path" => println!("{}", config.session_path.display()),
        "log_level" => println!("{}", config.log_level),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: catalog_path, categories_path, session_path, log_level",
                key
            );
        }
    }
    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure artistly.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
