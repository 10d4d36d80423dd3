use thiserror::Error;

/// Application-level error type.
///
/// Nothing here is fatal to a session: `main` reports the message and exits
/// cleanly, and the catalog / analyzer layers degrade before they ever return
/// one of these to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog document is malformed: {0}")]
    CatalogParse(String),

    #[error("Session interrupted")]
    Interrupted,

    #[error("Resource {resource} is unusable: {message}")]
    InvalidResource { resource: String, message: String },

    #[error("Text analysis failed: {0}")]
    Analysis(String),

    #[error("Resource fetch failed for {resource}: {message}")]
    ResourceFetch { resource: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for the user-initiated stop (Ctrl-C or closed input).
    pub fn is_interrupt(&self) -> bool {
        matches!(self, AppError::Interrupted)
    }
}
