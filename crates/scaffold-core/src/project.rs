//! Project descriptor accumulated from flags and prompts

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default answers for the coordinate prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            group_id: "me.snowdrop".to_string(),
            artifact_id: "myproject".to_string(),
            version: "1.0.0-SNAPSHOT".to_string(),
        }
    }
}

/// How the generator should assemble the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Start from a named template
    Template(String),
    /// Start from a selection of modules, in selection order
    Modules(Vec<String>),
}

/// Violations of the template-or-modules rule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("either a template or at least one module must be selected")]
    NoGeneration,

    #[error("template name is empty")]
    BlankTemplate,

    #[error("module selection contains an empty module name")]
    BlankModule,
}

/// Immutable description of the project to request from the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub spring_boot_version: String,
    pub snowdrop_bom: String,
    pub generation: Generation,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub package_name: String,
    pub out_dir: String,
}

impl ProjectDescriptor {
    /// Query parameters sent to `GET <base>/app`, empty values omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs: Vec<(&'static str, &str)> = Vec::new();

        if let Generation::Template(template) = &self.generation {
            pairs.push(("template", template.as_str()));
        }

        for (key, value) in [
            ("groupid", &self.group_id),
            ("artifactid", &self.artifact_id),
            ("version", &self.version),
            ("packagename", &self.package_name),
            ("snowdropbom", &self.snowdrop_bom),
            ("springbootversion", &self.spring_boot_version),
            ("outdir", &self.out_dir),
        ] {
            if !value.is_empty() {
                pairs.push((key, value.as_str()));
            }
        }

        if let Generation::Modules(modules) = &self.generation {
            for module in modules {
                pairs.push(("module", module.as_str()));
            }
        }

        pairs
    }

    /// Directory the project is extracted into
    pub fn target_dir(&self, cwd: &Path) -> PathBuf {
        let out = Path::new(&self.out_dir);
        let dir = if out.is_absolute() {
            out.to_path_buf()
        } else {
            cwd.join(out)
        };
        // Drops trailing separators so the archive lands next to the directory
        dir.components().collect()
    }
}

/// `<target>.zip`, sitting next to the target directory
pub fn archive_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".zip");
    PathBuf::from(name)
}

/// Accumulates answers until every field of a [`ProjectDescriptor`] is known
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    spring_boot_version: Option<String>,
    snowdrop_bom: Option<String>,
    generation: Option<Generation>,
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    package_name: Option<String>,
    out_dir: Option<String>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spring_boot_version(mut self, version: impl Into<String>) -> Self {
        self.spring_boot_version = Some(version.into());
        self
    }

    pub fn snowdrop_bom(mut self, bom: impl Into<String>) -> Self {
        self.snowdrop_bom = Some(bom.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.generation = Some(Generation::Template(template.into()));
        self
    }

    pub fn modules(mut self, modules: Vec<String>) -> Self {
        self.generation = Some(Generation::Modules(modules));
        self
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn out_dir(mut self, out_dir: impl Into<String>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// `<groupId>.<artifactId>` once both are known
    pub fn default_package_name(&self) -> Option<String> {
        match (&self.group_id, &self.artifact_id) {
            (Some(group), Some(artifact)) => Some(format!("{}.{}", group, artifact)),
            _ => None,
        }
    }

    /// Freeze the answers into a descriptor
    ///
    /// Only the generation choice is validated; every other field may be empty
    /// when its prompt failed, and empty fields are left out of the request.
    pub fn build(self) -> Result<ProjectDescriptor, ProjectError> {
        let generation = match self.generation {
            None => return Err(ProjectError::NoGeneration),
            Some(Generation::Template(t)) if t.trim().is_empty() => {
                return Err(ProjectError::BlankTemplate)
            }
            Some(Generation::Modules(m)) if m.is_empty() => return Err(ProjectError::NoGeneration),
            Some(Generation::Modules(m)) if m.iter().any(|name| name.trim().is_empty()) => {
                return Err(ProjectError::BlankModule)
            }
            Some(generation) => generation,
        };

        Ok(ProjectDescriptor {
            spring_boot_version: self.spring_boot_version.unwrap_or_default(),
            snowdrop_bom: self.snowdrop_bom.unwrap_or_default(),
            generation,
            group_id: self.group_id.unwrap_or_default(),
            artifact_id: self.artifact_id.unwrap_or_default(),
            version: self.version.unwrap_or_default(),
            package_name: self.package_name.unwrap_or_default(),
            out_dir: self.out_dir.unwrap_or_default(),
        })
    }
}
