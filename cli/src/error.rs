//! CLI error types
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::path::PathBuf;

use maxflow_core::FlowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
