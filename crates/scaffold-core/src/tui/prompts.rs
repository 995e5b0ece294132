//! Charm-style CLI prompts using cliclack

use crate::archive;
use crate::generator::{GeneratorClient, GeneratorConfig, GeneratorError, Module};
use crate::product::ProductConfig;
use crate::project::ProjectBuilder;
use crate::prompt::{failure_message, PromptFailure, Prompter};
use crate::workflow::{self, ScaffoldArgs};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// [`Prompter`] backed by the terminal
///
/// An interrupt (Ctrl-C, Esc) exits the process with status 1. Any other
/// prompt error is printed and the prompt yields its fallback value.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn settle<T>(result: io::Result<T>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(err) => match PromptFailure::classify(&err) {
                PromptFailure::Interrupted => {
                    let _ = console::Term::stderr().show_cursor();
                    std::process::exit(1);
                }
                PromptFailure::Recoverable => {
                    println!("{}", failure_message(&err));
                    fallback
                }
            },
        }
    }

    fn nothing_to_choose() -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, "no options available")
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        Self::settle(cliclack::confirm(message).interact(), false)
    }

    fn choose(&mut self, message: &str, options: &[String], default: Option<&str>) -> String {
        if options.is_empty() {
            return Self::settle(Err(Self::nothing_to_choose()), String::new());
        }

        let mut select = cliclack::select(message);
        for option in options {
            select = select.item(option.clone(), option, "");
        }
        if let Some(default) = default {
            select = select.initial_value(default.to_string());
        }

        Self::settle(select.interact(), String::new())
    }

    fn choose_many(&mut self, message: &str, options: &[String]) -> Vec<String> {
        if options.is_empty() {
            return Self::settle(Err(Self::nothing_to_choose()), Vec::new());
        }

        let mut multi = cliclack::multiselect(message);
        for option in options {
            multi = multi.item(option.clone(), option, "");
        }

        Self::settle(multi.required(true).interact(), Vec::new())
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> String {
        let mut input = cliclack::input(message);
        if let Some(default) = default {
            input = input.placeholder(default).default_input(default);
        }

        Self::settle(
            input.interact::<String>(),
            default.unwrap_or_default().to_string(),
        )
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: ScaffoldArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let service_url = args
        .url_service
        .clone()
        .unwrap_or_else(|| config.default_service_url().to_string());
    let client = GeneratorClient::new(&service_url, config.user_agent())?;

    // Step 1: Fetch the generator configuration
    let generator = fetch_generator_config(&client).await?;

    let mut prompter = TerminalPrompter;

    // Step 2: Spring Boot version and Snowdrop bom
    let (version, bom) = workflow::resolve_versions(&mut prompter, &generator, &args)?;
    let builder = ProjectBuilder::new()
        .spring_boot_version(version.as_str())
        .snowdrop_bom(bom);

    // Step 3: Template or modules
    let builder = if workflow::prefers_template(&mut prompter, &args) {
        builder.template(workflow::choose_template(&mut prompter, &generator, &args)?)
    } else {
        let modules = if args.modules.is_empty() {
            fetch_modules(&client, &version).await?
        } else {
            Vec::new()
        };
        builder.modules(workflow::choose_modules(
            &mut prompter,
            &modules,
            &version,
            &args,
        ))
    };

    // Step 4: Project coordinates and location
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let project = workflow::collect_coordinates(
        &mut prompter,
        &args,
        &config.defaults(),
        &cwd,
        builder,
    )
    .build()?;

    // Step 5: Download and extract
    cliclack::log::info(format!(
        "URL of the request calling the service is {}",
        client.app_url(&project)?
    ))?;

    let spinner = cliclack::spinner();
    spinner.start("Generating project...");

    let materialized = match archive::fetch_and_extract(&client, &project, &cwd).await {
        Ok(materialized) => materialized,
        Err(e) => {
            spinner.stop("Project generation failed");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        materialized.files,
        materialized.target.display()
    ));

    print_next_steps(config, &materialized.target)?;

    Ok(())
}

async fn fetch_generator_config(client: &GeneratorClient) -> Result<GeneratorConfig> {
    let spinner = cliclack::spinner();
    spinner.start("Loading generator configuration...");

    match client.fetch_config().await {
        Ok(config) => {
            spinner.stop(format!(
                "Generator configuration loaded from {}",
                client.base_url()
            ));
            Ok(config)
        }
        Err(e) => {
            spinner.stop("Failed to load generator configuration");
            Err(fatal(e))
        }
    }
}

async fn fetch_modules(client: &GeneratorClient, version: &str) -> Result<Vec<Module>> {
    let spinner = cliclack::spinner();
    spinner.start("Loading modules...");

    match client.fetch_modules(version).await {
        Ok(modules) => {
            spinner.stop(format!("Modules available for Spring Boot {}", version));
            Ok(modules)
        }
        Err(e) => {
            spinner.stop("Failed to load modules");
            Err(fatal(e))
        }
    }
}

/// Without its configuration the generator cannot be driven any further
///
/// Printing is left to the caller of [`run`].
fn fatal(err: GeneratorError) -> anyhow::Error {
    anyhow::Error::new(err).context("Cannot continue without the generator configuration")
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
