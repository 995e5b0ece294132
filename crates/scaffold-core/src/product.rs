//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a generator front-end implements to
//! configure the scaffolding behavior for its specific service.

use crate::project::ProjectDefaults;
use std::path::Path;

/// Configuration trait for generator products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Generator service URL
/// - Default project coordinates
/// - Post-generation instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Base URL of the generator service when `--urlservice` is not given
    fn default_service_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        crate::USER_AGENT
    }

    /// Default answers offered for the coordinate prompts
    fn defaults(&self) -> ProjectDefaults {
        ProjectDefaults::default()
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
