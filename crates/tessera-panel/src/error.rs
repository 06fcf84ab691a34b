//! Error types for panel rendering.

use thiserror::Error;

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur while rendering the panel markup.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),
}
