use check_updates_core::{CheckError, Constraint, Dependency, Section};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Dependencies read from a composer.json, in file order
#[derive(Debug, Default)]
pub struct ParsedManifest {
    pub dependencies: Vec<Dependency>,
    /// Requirements that could not be parsed, by package name
    pub invalid: Vec<(String, CheckError)>,
    /// `extra.<family>.require` entries, by family
    pub platform: Vec<(String, Constraint)>,
}

impl ParsedManifest {
    /// Number of dependencies found in a section
    pub fn count(&self, section: Section) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.section == section)
            .count()
    }

    /// The declared requirement of a framework family, e.g. `extra.symfony.require`
    pub fn platform_requirement(&self, family: &str) -> Option<&Constraint> {
        self.platform
            .iter()
            .find(|(name, _)| name == family)
            .map(|(_, constraint)| constraint)
    }
}

pub struct ComposerJsonParser {
    include_dev: bool,
}

impl ComposerJsonParser {
    pub fn new(include_dev: bool) -> Self {
        Self { include_dev }
    }

    /// Read and parse a composer.json file
    pub fn parse(&self, path: &Path) -> Result<ParsedManifest, CheckError> {
        let content = fs::read_to_string(path).map_err(|_| CheckError::ManifestNotFound {
            path: path.to_path_buf(),
        })?;

        self.parse_str(&content, path)
    }

    pub fn parse_str(&self, content: &str, path: &Path) -> Result<ParsedManifest, CheckError> {
        let invalid = |reason: &str| CheckError::ManifestInvalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let doc: Value = serde_json::from_str(content)
            .map_err(|e| invalid(&format!("does not contain valid JSON ({e})")))?;

        let root = doc
            .as_object()
            .ok_or_else(|| invalid("top level is not a JSON object"))?;

        if !root.contains_key("require") && !root.contains_key("require-dev") {
            return Err(invalid("does not contain «require» nor «require-dev» sections"));
        }

        let mut manifest = ParsedManifest::default();

        let mut sections = vec![Section::Require];
        if self.include_dev {
            sections.push(Section::RequireDev);
        }

        for section in sections {
            if let Some(entries) = root.get(section.key()).and_then(Value::as_object) {
                self.parse_section(entries, section, path, &mut manifest);
            }
        }

        if let Some(extra) = root.get("extra").and_then(Value::as_object) {
            manifest.platform = extra
                .iter()
                .filter_map(|(family, settings)| {
                    let raw = settings.get("require")?.as_str()?;
                    Some((family.clone(), Constraint::parse(raw).ok()?))
                })
                .collect();
        }

        Ok(manifest)
    }

    fn parse_section(
        &self,
        entries: &Map<String, Value>,
        section: Section,
        path: &Path,
        manifest: &mut ParsedManifest,
    ) {
        for (name, value) in entries {
            if is_platform_package(name) {
                continue;
            }

            let Some(raw) = value.as_str() else {
                debug!(package = %name, %section, "skipping non-string requirement");
                continue;
            };

            match Constraint::parse(raw) {
                Ok(constraint) => manifest.dependencies.push(Dependency {
                    name: name.clone(),
                    constraint,
                    section,
                    source_file: path.to_path_buf(),
                }),
                Err(e) => manifest.invalid.push((name.clone(), e)),
            }
        }
    }
}

/// `php`, `ext-*`, `lib-*`, `composer-plugin-api` and the like: anything
/// without a vendor segment is provided by the platform, not Packagist
pub fn is_platform_package(name: &str) -> bool {
    !name.contains('/')
}
