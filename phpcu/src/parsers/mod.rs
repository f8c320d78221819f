pub mod composer_json;

pub use composer_json::{ComposerJsonParser, ParsedManifest, is_platform_package};

// Re-export Dependency from core
pub use check_updates_core::Dependency;
