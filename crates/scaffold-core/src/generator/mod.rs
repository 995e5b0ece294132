//! Remote project generator: configuration model and HTTP client
//!
//! This module provides:
//! - Generator configuration types (GeneratorConfig, Bom, Template, Module)
//! - The HTTP client for the config, modules and app endpoints

pub mod client;
pub mod model;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{decode_body, GeneratorClient, GeneratorError, UNAVAILABLE_MARKER};
pub use model::{module_names_for, Bom, GeneratorConfig, Module, Template};
