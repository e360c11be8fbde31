//! Retrieval errors
//!
//! Internal to the retrieval layer: the public catalog/detail contracts
//! normalize all of these to empty/absent results.

use thiserror::Error;

/// Errors that can occur while talking to the vehicles API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
