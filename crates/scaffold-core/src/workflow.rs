//! Individual steps of the scaffolding sequence
//!
//! Every step takes its answer from the matching command-line flag when one
//! was given and asks the [`Prompter`] otherwise.

use crate::generator::{module_names_for, GeneratorConfig, Module};
use crate::project::{ProjectBuilder, ProjectDefaults};
use crate::prompt::{self, Prompter};
use anyhow::Result;
use std::path::Path;

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ScaffoldArgs {
    /// Generator service base URL
    pub url_service: Option<String>,

    /// Template name to use
    pub template: Option<String>,

    /// Modules to include (mutually exclusive with template)
    pub modules: Vec<String>,

    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub package_name: Option<String>,
    pub spring_boot_version: Option<String>,
    pub snowdrop_bom: Option<String>,

    /// Project location, relative to the current directory unless absolute
    pub out_dir: Option<String>,
}

/// Pick the Spring Boot version and the Snowdrop bom that goes with it
pub fn resolve_versions<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &GeneratorConfig,
    args: &ScaffoldArgs,
) -> Result<(String, String)> {
    let version = match &args.spring_boot_version {
        Some(version) => version.clone(),
        None => prompt::select(
            prompter,
            "Spring Boot version",
            &config.versions(),
            config.default_version(),
        ),
    };

    if let Some(bom) = &args.snowdrop_bom {
        return Ok((version, bom.clone()));
    }

    // A prompted version is always one of the listed ones unless the prompt
    // failed, in which case the run carries on with an empty bom
    let mut snowdrop_bom = match config.bom_for(&version) {
        Some(bom) => bom.snowdrop.clone(),
        None if args.spring_boot_version.is_some() => anyhow::bail!(
            "Spring Boot version '{}' not found. Available versions: {}",
            version,
            config.versions().join(", ")
        ),
        None => String::new(),
    };
    if let Some(supported) = config.supported_version_for(&version) {
        if prompt::confirm(prompter, "Use supported version") {
            snowdrop_bom = supported.to_string();
        }
    }

    Ok((version, snowdrop_bom))
}

/// Whether the project starts from a template rather than a module selection
pub fn prefers_template<P: Prompter + ?Sized>(prompter: &mut P, args: &ScaffoldArgs) -> bool {
    if args.template.is_some() {
        return true;
    }
    if !args.modules.is_empty() {
        return false;
    }
    prompt::confirm(prompter, "Create from template")
}

pub fn choose_template<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &GeneratorConfig,
    args: &ScaffoldArgs,
) -> Result<String> {
    if let Some(template) = &args.template {
        if !config.has_template(template) {
            anyhow::bail!(
                "Template '{}' not found. Available templates: {}",
                template,
                config.template_names().join(", ")
            );
        }
        return Ok(template.clone());
    }

    Ok(prompt::select(
        prompter,
        "Available templates",
        &config.template_names(),
        None,
    ))
}

pub fn choose_modules<P: Prompter + ?Sized>(
    prompter: &mut P,
    modules: &[Module],
    version: &str,
    args: &ScaffoldArgs,
) -> Vec<String> {
    if !args.modules.is_empty() {
        return args.modules.clone();
    }
    prompt::multi_select(prompter, "Select modules", &module_names_for(modules, version))
}

fn answer<P: Prompter + ?Sized>(
    prompter: &mut P,
    preset: &Option<String>,
    message: &str,
    default: Option<&str>,
) -> String {
    match preset {
        Some(value) => value.clone(),
        None => prompt::ask(prompter, message, default),
    }
}

/// Group id, artifact id, version, package name and project location
pub fn collect_coordinates<P: Prompter + ?Sized>(
    prompter: &mut P,
    args: &ScaffoldArgs,
    defaults: &ProjectDefaults,
    cwd: &Path,
    builder: ProjectBuilder,
) -> ProjectBuilder {
    let builder = builder
        .group_id(answer(prompter, &args.group_id, "Group Id", Some(defaults.group_id.as_str())))
        .artifact_id(answer(
            prompter,
            &args.artifact_id,
            "Artifact Id",
            Some(defaults.artifact_id.as_str()),
        ))
        .version(answer(prompter, &args.version, "Version", Some(defaults.version.as_str())));

    let package_default = builder.default_package_name();
    let builder = builder.package_name(answer(
        prompter,
        &args.package_name,
        "Package name",
        package_default.as_deref(),
    ));

    let location = format!(
        "Project location (immediate child directory of {})",
        cwd.display()
    );
    builder.out_dir(answer(prompter, &args.out_dir, &location, None))
}
