/// Error types shared by the useful-links crates.
///
/// Missing translations and sections without links are not errors; they degrade
/// to empty strings and empty lists. The only failure a search can surface is
/// the section tree being unavailable.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("configuration unavailable ({path}): {reason}")]
    ConfigurationUnavailable { path: String, reason: String },

    #[error("invalid translation catalog: {0}")]
    InvalidCatalog(String),
}
