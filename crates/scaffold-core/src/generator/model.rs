//! Generator service configuration and module types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bill-of-materials versions associated with one framework version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bom {
    /// Primary bom version used for this framework version
    pub snowdrop: String,

    /// Supported alternates, the first one is offered to the user
    #[serde(default)]
    pub supported: Vec<String>,

    /// Marks the framework version proposed by default
    #[serde(default)]
    pub default: bool,
}

/// A curated project skeleton offered instead of module selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Generator configuration served by `GET <base>/config`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Framework version label to bom record
    #[serde(default)]
    pub boms: BTreeMap<String, Bom>,

    #[serde(default)]
    pub templates: Vec<Template>,
}

impl GeneratorConfig {
    /// All framework version labels, sorted
    pub fn versions(&self) -> Vec<String> {
        self.boms.keys().cloned().collect()
    }

    /// The version whose bom is flagged as default, if any
    pub fn default_version(&self) -> Option<&str> {
        self.boms
            .iter()
            .find(|(_, bom)| bom.default)
            .map(|(version, _)| version.as_str())
    }

    pub fn bom_for(&self, version: &str) -> Option<&Bom> {
        self.boms.get(version)
    }

    /// First supported alternate bom for a framework version
    pub fn supported_version_for(&self, version: &str) -> Option<&str> {
        self.bom_for(version)
            .and_then(|bom| bom.supported.first())
            .map(String::as_str)
    }

    pub fn template_names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }
}

/// A starter that can be added to a generated project
/// (served by `GET <base>/modules/<version>`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Framework versions this module works with; empty means all
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Module {
    pub fn is_available_for(&self, version: &str) -> bool {
        self.versions.is_empty() || self.versions.iter().any(|v| v == version)
    }
}

/// Names of the modules compatible with a framework version, without duplicates
pub fn module_names_for(modules: &[Module], version: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for module in modules.iter().filter(|m| m.is_available_for(version)) {
        if !names.contains(&module.name) {
            names.push(module.name.clone());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
boms:
  "2.1.0":
    snowdrop: "x.y"
    supported: ["a.b"]
  "1.5.19":
    snowdrop: "1.5.19.Final"
    default: true
templates:
  - name: rest
    description: Simple REST endpoint
  - name: crud
"#;

    fn config() -> GeneratorConfig {
        serde_yaml::from_str(CONFIG).unwrap()
    }

    #[test]
    fn test_versions_are_sorted() {
        assert_eq!(config().versions(), vec!["1.5.19", "2.1.0"]);
    }

    #[test]
    fn test_default_version() {
        assert_eq!(config().default_version(), Some("1.5.19"));
        assert_eq!(GeneratorConfig::default().default_version(), None);
    }

    #[test]
    fn test_supported_version_for() {
        let c = config();
        assert_eq!(c.bom_for("2.1.0").unwrap().snowdrop, "x.y");
        assert_eq!(c.supported_version_for("2.1.0"), Some("a.b"));
        assert_eq!(c.supported_version_for("1.5.19"), None);
        assert_eq!(c.supported_version_for("9.9.9"), None);
    }

    #[test]
    fn test_templates() {
        let c = config();
        assert_eq!(c.template_names(), vec!["rest", "crud"]);
        assert!(c.has_template("crud"));
        assert!(!c.has_template("web"));
        assert_eq!(c.templates[1].description, "");
    }

    #[test]
    fn test_module_names_for_version() {
        let modules: Vec<Module> = serde_yaml::from_str(
            r#"
- name: web
- name: data-jpa
  versions: ["2.1.0"]
- name: legacy
  versions: ["1.5.19"]
- name: web
"#,
        )
        .unwrap();

        assert_eq!(module_names_for(&modules, "2.1.0"), vec!["web", "data-jpa"]);
        assert_eq!(module_names_for(&modules, "1.5.19"), vec!["web", "legacy"]);
    }
}
