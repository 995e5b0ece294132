//! Snowdrop scaffold - Spring Boot maven projects from the Snowdrop generator

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use scaffold_core::{ProductConfig, ScaffoldArgs};
use std::path::Path;

/// Generator service used when `--urlservice` is not given
pub const SERVICE_ENDPOINT: &str = "http://spring-boot-generator.195.201.87.126.nip.io";

/// Snowdrop product configuration
#[derive(Clone)]
pub struct SnowdropConfig;

impl ProductConfig for SnowdropConfig {
    fn name(&self) -> &'static str {
        "snowdrop-scaffold"
    }

    fn display_name(&self) -> &'static str {
        "Snowdrop"
    }

    fn default_service_url(&self) -> &'static str {
        SERVICE_ENDPOINT
    }

    fn cli_description(&self) -> &'static str {
        "Create a Spring Boot maven project"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        if std::env::current_dir().ok().as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }
        steps.push("mvn spring-boot:run".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a Spring Boot maven project
    Scaffold(CliScaffoldArgs),
}

#[derive(Parser, Debug)]
pub struct CliScaffoldArgs {
    /// Template name used to select the project to be created
    #[arg(short, long, conflicts_with = "modules")]
    pub template: Option<String>,

    /// URL of the HTTP Server exposing the spring boot service
    #[arg(short = 'u', long = "urlservice", default_value = SERVICE_ENDPOINT)]
    pub url_service: String,

    /// Spring Boot modules/starters (repeatable)
    #[arg(short = 'm', long = "module")]
    pub modules: Vec<String>,

    /// GroupId : com.example
    #[arg(short = 'g', long = "groupid")]
    pub group_id: Option<String>,

    /// ArtifactId: demo
    #[arg(short = 'i', long = "artifactid")]
    pub artifact_id: Option<String>,

    /// Version: 0.0.1-SNAPSHOT
    #[arg(short = 'v', long = "version")]
    pub release_version: Option<String>,

    /// Package Name: com.example.demo
    #[arg(short = 'p', long = "packagename")]
    pub package_name: Option<String>,

    /// Spring Boot Version
    #[arg(short = 's', long = "springbootversion")]
    pub spring_boot_version: Option<String>,

    /// Snowdrop Bom Version
    #[arg(short = 'b', long = "snowdropbom")]
    pub snowdrop_bom: Option<String>,

    /// Project location, relative to the current directory
    #[arg(short = 'o', long = "outdir")]
    pub out_dir: Option<String>,

    /// Reserved, currently ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    pub name: Option<String>,
}

impl From<CliScaffoldArgs> for ScaffoldArgs {
    fn from(args: CliScaffoldArgs) -> Self {
        ScaffoldArgs {
            url_service: Some(args.url_service),
            template: args.template,
            modules: args.modules,
            group_id: args.group_id,
            artifact_id: args.artifact_id,
            version: args.release_version,
            package_name: args.package_name,
            spring_boot_version: args.spring_boot_version,
            snowdrop_bom: args.snowdrop_bom,
            out_dir: args.out_dir,
        }
    }
}

fn command(config: &SnowdropConfig) -> clap::Command {
    Args::command()
        .name(config.name())
        .about(config.cli_description())
}

fn parse_args(config: &SnowdropConfig) -> Args {
    let matches = command(config).get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

async fn scaffold(config: &SnowdropConfig, args: ScaffoldArgs) -> Result<()> {
    let result = scaffold_core::run(config, args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // A user interrupt ends the run with status 1
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    })
    .ok();

    let config = SnowdropConfig;
    let args = parse_args(&config);

    let result = match args.command {
        Some(Command::Scaffold(scaffold_args)) => scaffold(&config, scaffold_args.into()).await,
        // No subcommand provided, default to the interactive scaffold
        None => scaffold(&config, ScaffoldArgs::default()).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
