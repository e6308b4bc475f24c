use anyhow::Result;

pub mod attendance;
pub mod cli;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod manager;
pub mod menu;
pub mod models;
pub mod roster;
pub mod settings;

pub use error::{Entity, SchoolError, SchoolResult};
pub use manager::SchoolManager;
pub use models::{Course, Status, Student, StudentUpdate, ValidationMode};
pub use settings::Settings;

use std::path::Path;

/// Creates a `SchoolManager` for the given settings, preloaded with the students from `roster`
/// if one is given.
///
/// There is no global session: the caller owns the returned manager for the whole run.
pub fn create_manager(settings: &Settings, roster: Option<&Path>) -> Result<SchoolManager> {
    let mut manager = SchoolManager::new(settings.validation);

    if let Some(roster) = roster {
        // Duplicate rows are logged by the import itself.
        import::import_roster(&mut manager, roster)?;
    }

    Ok(manager)
}
