use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::todoist::ApiError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] ApiError),

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(todoist_mcp::cli::bind_failed),
        help("Is another process listening on that port? Try --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP server error: {message}")]
    #[diagnostic(code(todoist_mcp::cli::serve))]
    Serve { message: String },
}

pub type CliResult<T> = Result<T, CliError>;
