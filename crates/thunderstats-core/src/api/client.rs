//! Vehicles API client
//!
//! Handles catalog pagination, detail lookups and the version/stats endpoint.
//! The catalog endpoint caps results at [`PAGE_SIZE`] records per request, so
//! [`ApiClient::fetch_catalog`] issues successive page requests and
//! concatenates them into one logical sequence.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ApiError;
use crate::vehicle::VehicleRecord;

/// Production base URL of the vehicles API
pub const DEFAULT_BASE_URL: &str = "https://www.wtvehiclesapi.sgambe.serv00.net/api";

/// Maximum records the upstream source returns per catalog request
pub const PAGE_SIZE: usize = 200;

/// Consecutive failed pages tolerated before the catalog fetch gives up.
/// A failed page contributes zero records and the fetch moves on, but an
/// unreachable upstream must not spin forever.
const MAX_CONSECUTIVE_PAGE_FAILURES: u32 = 3;

/// Upstream filter flags for a catalog fetch.
///
/// Mirrors the query parameters the vehicles API accepts. The defaults match
/// the application's standard catalog view: event/killstreak vehicles
/// excluded, everything else included.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    /// Restrict to a primary vehicle type (upstream-side filter).
    pub vehicle_type: Option<String>,
    pub is_premium: Option<bool>,
    pub is_pack: Option<bool>,
    pub is_squadron_vehicle: Option<bool>,
    pub is_on_marketplace: Option<bool>,
    pub exclude_killstreak: bool,
    pub exclude_event_vehicles: bool,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            vehicle_type: None,
            is_premium: None,
            is_pack: None,
            is_squadron_vehicle: None,
            is_on_marketplace: None,
            exclude_killstreak: true,
            exclude_event_vehicles: true,
        }
    }
}

impl CatalogQuery {
    /// Serialize into query pairs for a given page index.
    fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
            ("excludeKillstreak", self.exclude_killstreak.to_string()),
            ("excludeEventVehicles", self.exclude_event_vehicles.to_string()),
        ];
        if let Some(t) = &self.vehicle_type {
            pairs.push(("type", t.clone()));
        }
        if let Some(v) = self.is_premium {
            pairs.push(("isPremium", v.to_string()));
        }
        if let Some(v) = self.is_pack {
            pairs.push(("isPack", v.to_string()));
        }
        if let Some(v) = self.is_squadron_vehicle {
            pairs.push(("isSquadronVehicle", v.to_string()));
        }
        if let Some(v) = self.is_on_marketplace {
            pairs.push(("isOnMarketplace", v.to_string()));
        }
        pairs
    }
}

/// Response shape of the version/stats endpoint
#[derive(Debug, Deserialize)]
struct VehicleStats {
    #[serde(default)]
    versions: Vec<String>,
}

/// Client for the vehicles API
pub struct ApiClient {
    /// HTTP client for API requests
    client: reqwest::Client,
    /// Base URL, overridable for tests
    base_url: String,
}

impl ApiClient {
    /// Create a client against the production API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("ThunderStats/0.1")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ApiClient {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the full vehicle catalog, paginating transparently.
    ///
    /// A failed page contributes zero records and the fetch proceeds to the
    /// next page; failures are logged, never surfaced. An unreachable
    /// upstream therefore yields an empty catalog rather than an error.
    pub async fn fetch_catalog(&self, query: &CatalogQuery) -> Vec<VehicleRecord> {
        collect_paginated(|page| self.fetch_catalog_page(query, page)).await
    }

    /// Fetch one catalog page.
    async fn fetch_catalog_page(
        &self,
        query: &CatalogQuery,
        page: u32,
    ) -> Result<Vec<VehicleRecord>, ApiError> {
        tracing::debug!(page, "fetching catalog page");
        self.get_json("/vehicles", &query.query_pairs(page)).await
    }

    /// Fetch one vehicle's full record, optionally pinned to a historical
    /// version tag. Returns `None` when the identifier is unknown or the
    /// request fails.
    pub async fn fetch_detail(
        &self,
        identifier: &str,
        version: Option<&str>,
    ) -> Option<VehicleRecord> {
        let mut params = vec![("name", identifier.to_string())];
        if let Some(v) = version {
            params.push(("version", v.to_string()));
        }

        // The detail endpoint answers with an array; the first element is
        // the requested vehicle.
        let result: Result<Vec<VehicleRecord>, ApiError> =
            self.get_json("/vehicles", &params).await;
        match result {
            Ok(records) => records.into_iter().next(),
            Err(e) => {
                tracing::warn!(identifier, ?version, "detail fetch failed: {e}");
                None
            }
        }
    }

    /// Fetch the available historical version tags, empty on failure.
    pub async fn fetch_versions(&self) -> Vec<String> {
        let result: Result<VehicleStats, ApiError> = self.get_json("/vehicles/stats", &[]).await;
        match result {
            Ok(stats) => stats.versions,
            Err(e) => {
                tracing::warn!("version list fetch failed: {e}");
                Vec::new()
            }
        }
    }

    /// GET a path under the base URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect a full paginated sequence from a page fetcher.
///
/// Pages are requested from index 0 upward until one returns fewer than
/// [`PAGE_SIZE`] records. A failed page contributes nothing and the loop
/// continues, up to a bound of consecutive failures so a dead upstream
/// terminates with whatever was gathered so far.
pub async fn collect_paginated<T, F, Fut>(mut fetch_page: F) -> Vec<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let mut all = Vec::new();
    let mut page = 0u32;
    let mut consecutive_failures = 0u32;

    loop {
        match fetch_page(page).await {
            Ok(records) => {
                consecutive_failures = 0;
                let count = records.len();
                all.extend(records);
                if count < PAGE_SIZE {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(page, "catalog page failed: {e}");
                consecutive_failures += 1;
                if consecutive_failures >= MAX_CONSECUTIVE_PAGE_FAILURES {
                    break;
                }
            }
        }
        page += 1;
    }

    all
}
