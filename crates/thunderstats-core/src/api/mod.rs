//! Retrieval layer
//!
//! Best-effort, read-only access to the vehicles API. Every failure mode
//! (transport error, HTTP error status, malformed JSON) resolves to an empty
//! sequence or an absent value at this boundary; callers never see an error
//! and there is no retry policy. Staleness between repeated calls is
//! acceptable — the upstream source may change at any time.

mod client;
mod error;

pub use client::{collect_paginated, ApiClient, CatalogQuery, DEFAULT_BASE_URL, PAGE_SIZE};
pub use error::ApiError;
