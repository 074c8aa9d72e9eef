//! Error types emitted by the dispatch CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dispatch_assign::AssignError;
use dispatch_core::{DatasetError, LocationTableError};
use thiserror::Error;

/// Errors emitted by the dispatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected or opened.
    #[error("failed to read {field} path {path:?}: {source}")]
    ReadSource {
        /// Flag that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The fleet dataset could not be decoded or validated.
    #[error("failed to load fleet dataset from {path:?}: {source}")]
    LoadFleet {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: DatasetError,
    },
    /// The location table could not be decoded or validated.
    #[error("failed to load location table from {path:?}: {source}")]
    LoadLocations {
        /// Location table path.
        path: Utf8PathBuf,
        /// Decoding or validation failure.
        #[source]
        source: LocationTableError,
    },
    /// The assignment engine rejected the order.
    #[error("assignment failed: {0}")]
    Assign(#[from] AssignError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
