//! Dependency status types.
//!
//! Each probe produces a [`Dependency`] describing whether a prerequisite
//! tool is present; a [`DependencyReport`] collects them in check order.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The result of checking a single prerequisite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Display name, e.g. `Git`.
    pub name: String,
    /// What the tool is needed for.
    pub description: String,
    /// Whether the tool was found.
    pub installed: bool,
    /// Version text reported by the tool, empty when unknown.
    pub version: String,
    /// Whether installation should be blocked without it.
    pub required: bool,
}

impl Dependency {
    /// A dependency that has not been found (yet).
    pub fn missing(name: &str, description: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            installed: false,
            version: String::new(),
            required,
        }
    }

    /// Mark as installed with the given version text.
    pub fn found(mut self, version: impl Into<String>) -> Self {
        self.installed = true;
        self.version = version.into();
        self
    }

    /// Human-readable status, e.g. `Installed (git version 2.43.0)`.
    pub fn status_text(&self) -> String {
        if !self.installed {
            "Not installed".to_string()
        } else if self.version.is_empty() {
            "Installed".to_string()
        } else {
            format!("Installed ({})", self.version)
        }
    }

    /// The bare version number inside [`Dependency::version`], if any.
    pub fn version_number(&self) -> Option<String> {
        extract_version(&self.version)
    }

    /// Required and not installed.
    pub fn is_blocking(&self) -> bool {
        self.required && !self.installed
    }
}

/// Extract the first `x.y[.z]` version number from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    static VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    VERSION
        .get_or_init(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok())
        .as_ref()?
        .captures(output)
        .map(|caps| caps[1].to_string())
}

/// Results of all dependency checks, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub dependencies: Vec<Dependency>,
}

impl DependencyReport {
    /// Wrap a list of checked dependencies.
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    /// True when no required dependency is missing.
    pub fn all_required_installed(&self) -> bool {
        !self.dependencies.iter().any(Dependency::is_blocking)
    }

    /// Required dependencies that are missing.
    pub fn missing_required(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(|d| d.is_blocking())
    }

    /// Look up a dependency by display name.
    pub fn get(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_variants() {
        let dep = Dependency::missing("Git", "Version control", true);
        assert_eq!(dep.status_text(), "Not installed");
        assert_eq!(dep.clone().found("").status_text(), "Installed");
        assert_eq!(
            dep.found("git version 2.43.0").status_text(),
            "Installed (git version 2.43.0)"
        );
    }

    #[test]
    fn extracts_version_numbers() {
        assert_eq!(
            extract_version("git version 2.43.0"),
            Some("2.43.0".to_string())
        );
        assert_eq!(
            extract_version("openjdk version \"17.0.9\" 2023-10-17"),
            Some("17.0.9".to_string())
        );
        assert_eq!(
            extract_version("Flutter 3.24 • channel stable"),
            Some("3.24".to_string())
        );
        assert_eq!(extract_version("no digits here"), None);
    }

    #[test]
    fn report_requires_only_required_deps() {
        let report = DependencyReport::new(vec![
            Dependency::missing("Git", "", true).found("git version 2.43.0"),
            Dependency::missing("Flutter SDK", "", false),
        ]);
        assert!(report.all_required_installed());
        assert_eq!(report.missing_required().count(), 0);
    }

    #[test]
    fn report_detects_missing_required() {
        let report = DependencyReport::new(vec![
            Dependency::missing("Git", "", true),
            Dependency::missing("Java JDK", "", true).found("17"),
        ]);
        assert!(!report.all_required_installed());
        let missing: Vec<_> = report.missing_required().map(|d| d.name.as_str()).collect();
        assert_eq!(missing, vec!["Git"]);
        assert!(report.get("Java JDK").is_some_and(|d| d.installed));
    }

    #[test]
    fn empty_report_is_satisfied() {
        assert!(DependencyReport::default().all_required_installed());
    }
}
