//! Render error types.

use crate::title::TitleError;

/// Error raised while rendering a breadcrumb or running render hooks.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The host's title index has no usable title for the page.
    #[error("Breadcrumb title lookup failed: {0}")]
    Title(#[from] TitleError),
    /// A host-supplied hook failed.
    #[error("Render hook failed: {0}")]
    Hook(String),
}
