//! This module contains the command-line interface [`Cli`] parser for the interactive school
//! records menu.

use clap::Parser;
use std::path::PathBuf;

use crate::models::ValidationMode;
use crate::settings::Settings;

/// The command line configuration struct, where the command-line interface parser is automatically
/// derived by [`clap::Parser`]. Every flag overrides the matching value from the settings file.
#[derive(Parser, Debug)]
#[command(version, about = "Keep track of students, courses, and attendance.")]
pub struct Cli {
    /// Settings file to read instead of `school.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV roster (ID,Name,Age,Gender,Contact) to load before the menu starts.
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Where "View Students" saves the roster. A `.csv` extension writes CSV instead of XLSX.
    #[arg(long)]
    pub export_path: Option<PathBuf>,

    /// Only accept `YYYY-MM-DD` dates and Present/Absent/Excused statuses.
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error, off).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to rotating files in this directory instead of stderr.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Applies the flags that were given on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(path) = &self.export_path {
            settings.export_path = path.clone();
        }
        if self.strict {
            settings.validation = ValidationMode::Strict;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            settings.log_dir = Some(dir.clone());
        }
        settings
    }
}
