//! Error types for stratus operations.
//!
//! This module provides the main error type [`StratusError`] which
//! wraps the error conditions that can occur while building and
//! exporting the diagram. A missing Graphviz installation is NOT one of
//! them: that is a detection result handled by the run loop.

use std::io;

use thiserror::Error;

use crate::{config::ConfigError, export, semantic};

/// The main error type for stratus operations.
#[derive(Debug, Error)]
pub enum StratusError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Diagram error: {0}")]
    Model(#[from] semantic::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<export::Error> for StratusError {
    fn from(error: export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<ConfigError> for StratusError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error.to_string())
    }
}
