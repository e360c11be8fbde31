use thunderstats_core::api::{collect_paginated, ApiClient, ApiError, CatalogQuery, PAGE_SIZE};
use thunderstats_core::timeline::{dataset_series, fetch_history, HistoryDataset};
use thunderstats_core::vehicle::VehicleRecord;

fn page_of(n: usize) -> Vec<VehicleRecord> {
    (0..n)
        .map(|i| VehicleRecord {
            identifier: format!("vehicle_{i}"),
            ..Default::default()
        })
        .collect()
}

/// Client pointed at a port nothing listens on; every request fails fast.
fn unreachable_client() -> ApiClient {
    ApiClient::with_base_url("http://127.0.0.1:1/api")
}

#[tokio::test]
async fn test_pagination_stitches_pages() {
    let collected = collect_paginated(|page| async move {
        match page {
            0 | 1 => Ok(page_of(PAGE_SIZE)),
            2 => Ok(page_of(37)),
            _ => panic!("fetched past the short page"),
        }
    })
    .await;
    assert_eq!(collected.len(), PAGE_SIZE * 2 + 37);
}

#[tokio::test]
async fn test_failed_page_contributes_zero_records() {
    let collected = collect_paginated(|page| async move {
        match page {
            0 => Ok(page_of(PAGE_SIZE)),
            1 => Err(ApiError::Status(502)),
            2 => Ok(page_of(5)),
            _ => Ok(Vec::new()),
        }
    })
    .await;
    assert_eq!(collected.len(), PAGE_SIZE + 5);
}

#[tokio::test]
async fn test_catalog_empty_on_unreachable_upstream() {
    let client = unreachable_client();
    let catalog = client.fetch_catalog(&CatalogQuery::default()).await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_detail_absent_on_unreachable_upstream() {
    let client = unreachable_client();
    let detail = client.fetch_detail("m1_abrams", None).await;
    assert!(detail.is_none());

    let pinned = client.fetch_detail("m1_abrams", Some("2.25")).await;
    assert!(pinned.is_none());
}

#[tokio::test]
async fn test_versions_empty_on_unreachable_upstream() {
    let client = unreachable_client();
    assert!(client.fetch_versions().await.is_empty());
}

#[tokio::test]
async fn test_history_maps_failures_positionally() {
    let client = unreachable_client();
    let versions = vec!["2.23".to_string(), "2.24".to_string(), "2.25".to_string()];

    let history = fetch_history(&client, "t_34", &versions).await;

    assert_eq!(history.len(), 3);
    for (point, version) in history.iter().zip(&versions) {
        assert_eq!(&point.version, version);
        assert_eq!(point.realistic_br, None);
        assert_eq!(point.repair_cost, None);
        assert_eq!(point.era, None);
    }

    let series = dataset_series(&history, HistoryDataset::BattleRating);
    assert_eq!(series, vec![None, None, None]);
}
