use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILENAME, PlenumConfig, StoreSettings};
use crate::storage::Store;

pub fn handle_init(store_path: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILENAME);

    if config_path.exists() {
        anyhow::bail!("Project already initialized at {}", config_path.display());
    }

    let config = PlenumConfig {
        store: StoreSettings { path: store_path },
    };

    // Create the database up front so the first command finds the schema
    Store::open(&config.store_path(&cwd))?;
    config.save(&config_path)?;

    println!(
        "{} plenum project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Store:  {}", config.store_path(&cwd).display());
    println!("\nSeed the roster next: plenum org add <CODE> <NAME> --rank <N>");

    Ok(())
}
