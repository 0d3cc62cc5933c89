//! CLI error types.

use blockhtml_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] blockhtml_renderer::Error),
}
