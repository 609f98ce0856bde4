//! Asset store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetStoreError {
    /// The request to the asset host failed outright.
    #[error("asset host request failed")]
    Upstream(#[from] reqwest::Error),

    /// The asset host answered with a non-success status.
    #[error("asset host rejected the upload with status {0}")]
    Rejected(u16),

    /// The asset host answered with a body we could not read.
    #[error("asset host returned an unreadable response")]
    InvalidResponse(#[source] reqwest::Error),
}
