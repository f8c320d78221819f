use check_updates_core::UpdateLevel;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::packagist::DEFAULT_REGISTRY;

/// Check for outdated Composer dependencies
#[derive(Parser, Debug, Clone)]
#[command(name = "phpcu")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory or path to composer.json (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Update composer.json with the proposed constraints
    #[arg(short, long)]
    pub update: bool,

    /// Which updates to write with -u
    #[arg(short, long, value_enum, default_value_t = Level::All)]
    pub level: Level,

    /// Ignore the require-dev section
    #[arg(long)]
    pub no_dev: bool,

    /// Packagist base URL
    #[arg(long, value_name = "URL", env = "PHPCU_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Update level as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Major, minor and patch
    All,
    /// Minor and patch
    Minor,
    /// Patch only
    Patch,
    /// Report only, write nothing
    None,
}

impl From<Level> for UpdateLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::All => UpdateLevel::All,
            Level::Minor => UpdateLevel::Minor,
            Level::Patch => UpdateLevel::Patch,
            Level::None => UpdateLevel::None,
        }
    }
}

impl Args {
    /// Get the project path, defaulting to current directory
    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
