use check_updates_core::{CheckError, Section, UpdatePlan};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Writes an update plan back into composer.json
pub struct FileUpdater;

impl FileUpdater {
    pub fn new() -> Self {
        Self
    }

    /// Whether the manifest can be written
    pub fn is_writable(path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly())
    }

    /// Replace the planned requirements, leaving everything else in place
    pub fn apply(&self, path: &Path, plan: &UpdatePlan) -> Result<UpdateResult, CheckError> {
        if !Self::is_writable(path) {
            return Err(CheckError::NotWritable {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let mut doc: Value =
            serde_json::from_str(&content).map_err(|e| CheckError::ManifestInvalid {
                path: path.to_path_buf(),
                reason: format!("does not contain valid JSON ({e})"),
            })?;

        let mut result = UpdateResult::default();

        for section in [Section::Require, Section::RequireDev] {
            let planned = plan.section(section);
            let Some(entries) = doc.get_mut(section.key()).and_then(Value::as_object_mut) else {
                continue;
            };

            // Only the section each package was scanned from
            for (name, constraint) in planned {
                if let Some(value) = entries.get_mut(name) {
                    debug!(package = %name, %section, %constraint, "updating requirement");
                    *value = Value::String(constraint.clone());
                    result.updated.push(name.clone());
                }
            }
        }

        if let Some(platform) = &plan.platform {
            let pointer = format!("/extra/{}/require", platform.family);
            match doc.pointer_mut(&pointer) {
                Some(value) if value.is_string() => {
                    info!(%pointer, constraint = %platform.constraint, "updating platform requirement");
                    *value = Value::String(platform.constraint.clone());
                    result.platform = Some(platform.constraint.clone());
                }
                _ => debug!(%pointer, "no platform requirement declared, leaving it alone"),
            }
        }

        fs::write(path, to_composer_json(path, &doc)?).map_err(|e| io_error(path, e))?;

        Ok(result)
    }
}

impl Default for FileUpdater {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize the way Composer does: four spaces, trailing newline
fn to_composer_json(path: &Path, doc: &Value) -> Result<Vec<u8>, CheckError> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    doc.serialize(&mut serializer)
        .map_err(|e| io_error(path, e.into()))?;
    out.push(b'\n');
    Ok(out)
}

fn io_error(path: &Path, source: std::io::Error) -> CheckError {
    if source.kind() == ErrorKind::PermissionDenied {
        CheckError::NotWritable {
            path: path.to_path_buf(),
        }
    } else {
        CheckError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of applying updates
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Packages whose requirement was rewritten
    pub updated: Vec<String>,
    /// New platform requirement, if one was written
    pub platform: Option<String>,
}

impl UpdateResult {
    /// Print post-update messages
    pub fn print_summary(&self) {
        if let Some(platform) = &self.platform {
            println!("Platform requirement set to {platform}");
        }
        if !self.updated.is_empty() {
            println!("composer.json updated. You can now run `composer update`");
        }
    }
}
