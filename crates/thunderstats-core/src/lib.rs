//! # ThunderStats Core Library
//!
//! Data-retrieval and normalization core for the ThunderStats vehicle
//! comparison application.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Pagination-aware fetching from the War Thunder vehicles API
//! - Field-fallback resolution over heterogeneous vehicle records
//! - Type/nation/search filtering of the catalog
//! - Metric normalization for radar-chart comparison
//! - View state for the comparison and timeline views
//!
//! Everything the presentation layer consumes crosses this boundary as plain
//! records, sequences and numbers; no UI framework types appear here. All
//! retrieval is best-effort: failures degrade to empty/absent/sentinel
//! values, never to errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use thunderstats_core::{api::{ApiClient, CatalogQuery}, filter::CatalogFilter};
//!
//! let client = ApiClient::new();
//! let catalog = client.fetch_catalog(&CatalogQuery::default()).await;
//!
//! let mut filter = CatalogFilter::default();
//! filter.search = "abrams".to_string();
//! for vehicle in filter.apply(&catalog) {
//!     println!("{}", vehicle.identifier);
//! }
//! ```

pub mod api;
pub mod compare;
pub mod demo;
pub mod filter;
pub mod normalize;
pub mod resolve;
pub mod timeline;
pub mod vehicle;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{ApiClient, CatalogQuery};
    pub use crate::compare::{ComparisonState, FetchToken, Slot};
    pub use crate::filter::CatalogFilter;
    pub use crate::normalize::{normalize_fixed, normalize_pairwise, MetricPoint};
    pub use crate::resolve::{
        resolve_battle_rating, resolve_image, resolve_metric, resolve_speed, BattleRating, Metric,
    };
    pub use crate::timeline::{fetch_history, HistoryDataset, HistoryPoint};
    pub use crate::vehicle::{GameMode, VehicleImages, VehicleRecord};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
