mod action;
mod attendance;
mod compliance;
mod dashboard;
mod init;
mod meeting;
mod org;
mod serve;
mod training;
mod utils;

pub use action::handle_action;
pub use attendance::handle_attendance;
pub use compliance::handle_compliance;
pub use dashboard::{handle_dashboard, handle_frequency};
pub use init::handle_init;
pub use meeting::handle_meeting;
pub use org::handle_org;
pub use serve::handle_serve;
pub use training::handle_training;

use std::path::PathBuf;

use anyhow::Result;

use crate::config::PlenumConfig;
use crate::storage::{Repository, Store};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PlenumConfig,
    pub root: PathBuf,
    pub repo: Repository,
}

impl CommandContext {
    pub fn new(config: PlenumConfig, root: PathBuf) -> Result<Self> {
        let store = Store::open(&config.store_path(&root))?;
        Ok(Self {
            config,
            root,
            repo: Repository::new(store),
        })
    }
}
