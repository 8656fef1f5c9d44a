use thiserror::Error;

/// Failures surfaced to the user as a status message. None are retried
/// and none are fatal; the application stays usable after any of them.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("invalid amount: '{0}'")]
    Parse(String),

    #[error("no entry at index {0} to save")]
    NotFound(usize),

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
