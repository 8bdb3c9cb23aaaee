//! CLI error types.

use crumbs_config::ConfigError;
use crumbs_core::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Invalid title index: {0}")]
    TitleIndex(#[from] serde_json::Error),
}
