//! Errors raised while driving Graphviz

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Graphviz executable '{program}' not found, install Graphviz or pass --dot-bin")]
    GraphvizNotFound { program: String },

    #[error("Graphviz failed ({status}): {stderr}")]
    GraphvizFailed { status: ExitStatus, stderr: String },

    #[error("could not open viewer '{program}': {source}")]
    Viewer {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown theme '{name}', available: {available}")]
    UnknownTheme { name: String, available: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
