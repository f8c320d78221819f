use crate::types::{UpdateCandidate, UpdateSeverity};
use colored::Colorize;

/// Renders the update candidates in a table format
pub struct TableRenderer {
    show_colors: bool,
}

impl TableRenderer {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Render all candidates with updates
    pub fn render(&self, candidates: &[UpdateCandidate]) {
        let updatable: Vec<&UpdateCandidate> =
            candidates.iter().filter(|c| c.has_update()).collect();

        if updatable.is_empty() {
            println!("All packages are up to date");
            return;
        }

        for line in self.rows(&updatable) {
            println!("{line}");
        }

        println!();
        println!("There are {} packages to update.", updatable.len());
    }

    /// Format rows with aligned columns
    pub fn rows(&self, candidates: &[&UpdateCandidate]) -> Vec<String> {
        let name_w = candidates.iter().map(|c| c.name.len()).max().unwrap_or(0);
        let from_w = candidates
            .iter()
            .map(|c| c.constraint.raw().len())
            .max()
            .unwrap_or(0);
        let to_w = candidates
            .iter()
            .filter_map(|c| c.new_constraint.as_ref())
            .map(String::len)
            .max()
            .unwrap_or(0);

        candidates
            .iter()
            .map(|c| {
                format!(
                    "  {:<name_w$}  {:>from_w$} → {:<to_w$}  {}",
                    c.name,
                    c.constraint.raw(),
                    c.new_constraint.as_deref().unwrap_or_default(),
                    self.format_severity(c.severity),
                )
            })
            .collect()
    }

    /// Format severity with optional colors
    pub fn format_severity(&self, severity: Option<UpdateSeverity>) -> String {
        let (label, color): (&str, fn(&str) -> colored::ColoredString) = match severity {
            Some(UpdateSeverity::Major) => ("MAJOR", |s| s.red()),
            Some(UpdateSeverity::Minor) => ("minor", |s| s.yellow()),
            Some(UpdateSeverity::Patch) => ("patch", |s| s.green()),
            None => return String::new(),
        };

        if self.show_colors {
            color(label).to_string()
        } else {
            label.to_string()
        }
    }
}
