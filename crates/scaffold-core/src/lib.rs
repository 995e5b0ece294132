//! Scaffold Core - Shared library for generator-backed project scaffolding
//!
//! This library drives a remote project generator: it reads the generator's
//! configuration, collects the project description from flags or prompts,
//! requests the generated archive and extracts it locally.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Generator client, project descriptor, archive extraction
//! - **Layer 2: Workflow Steps** - `Prompter` trait and step functions for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{archive, GeneratorClient, ProjectBuilder};
//!
//! let client = GeneratorClient::new("http://localhost:8080", "my-agent/1.0")?;
//! let config = client.fetch_config().await?;
//! let project = ProjectBuilder::new()
//!     .spring_boot_version("2.1.0")
//!     .snowdrop_bom(config.bom_for("2.1.0").unwrap().snowdrop.clone())
//!     .template("rest")
//!     // ... coordinates
//!     .build()?;
//! archive::fetch_and_extract(&client, &project, &std::env::current_dir()?).await?;
//! ```

pub mod archive;
pub mod generator;
pub mod product;
pub mod project;
pub mod prompt;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use generator::{GeneratorClient, GeneratorConfig, GeneratorError, Module};
pub use product::ProductConfig;
pub use project::{Generation, ProjectBuilder, ProjectDefaults, ProjectDescriptor, ProjectError};
pub use prompt::Prompter;
pub use workflow::ScaffoldArgs;

#[cfg(feature = "tui")]
pub use tui::run;

/// User agent sent with every request to the generator service
pub const USER_AGENT: &str = "snowdrop-scaffold/1.0";
