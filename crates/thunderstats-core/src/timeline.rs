//! Historical timeline
//!
//! Builds the per-version history of a vehicle for the timeline view. Detail
//! fetches for all version tags are issued concurrently and mapped back onto
//! their originating tag positionally; an individual failed fetch becomes an
//! all-gap point at its index rather than failing the whole batch, so the
//! chart renders with holes instead of disappearing.

use futures::future::join_all;

use crate::api::ApiClient;
use crate::vehicle::VehicleRecord;

/// One vehicle snapshot pinned to a historical version tag.
///
/// Field values are `None` when the fetch for that version failed or the
/// record did not carry the field.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub version: String,
    pub realistic_br: Option<f64>,
    pub repair_cost: Option<f64>,
    pub era: Option<f64>,
}

impl HistoryPoint {
    /// Build a point from an optional detail record.
    pub fn from_record(version: impl Into<String>, record: Option<&VehicleRecord>) -> Self {
        HistoryPoint {
            version: version.into(),
            realistic_br: record.and_then(|r| r.realistic_br),
            repair_cost: record.and_then(|r| r.repair_cost_realistic),
            era: record.and_then(|r| r.era_numeric()),
        }
    }
}

/// Which historical series the timeline chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDataset {
    BattleRating,
    RepairCost,
    Rank,
}

/// Extract one chart-ready series from history points, gaps preserved.
pub fn dataset_series(points: &[HistoryPoint], dataset: HistoryDataset) -> Vec<Option<f64>> {
    points
        .iter()
        .map(|p| match dataset {
            HistoryDataset::BattleRating => p.realistic_br,
            HistoryDataset::RepairCost => p.repair_cost,
            HistoryDataset::Rank => p.era,
        })
        .collect()
}

/// Fetch a vehicle's history across version tags, one point per tag.
///
/// Fetches fan out concurrently; results are matched to versions by
/// position. Never fails — a dead upstream yields all-gap points.
pub async fn fetch_history(
    client: &ApiClient,
    identifier: &str,
    versions: &[String],
) -> Vec<HistoryPoint> {
    let fetches = versions
        .iter()
        .map(|version| client.fetch_detail(identifier, Some(version)));
    let records = join_all(fetches).await;

    versions
        .iter()
        .zip(records)
        .map(|(version, record)| HistoryPoint::from_record(version.clone(), record.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(version: &str, br: Option<f64>) -> HistoryPoint {
        HistoryPoint {
            version: version.to_string(),
            realistic_br: br,
            repair_cost: br.map(|v| v * 100.0),
            era: None,
        }
    }

    #[test]
    fn failed_fetch_becomes_all_gap_point() {
        let p = HistoryPoint::from_record("2.25", None);
        assert_eq!(p.version, "2.25");
        assert_eq!(p.realistic_br, None);
        assert_eq!(p.repair_cost, None);
        assert_eq!(p.era, None);
    }

    #[test]
    fn series_preserves_gaps() {
        let points = vec![
            point("2.23", Some(5.7)),
            point("2.24", None),
            point("2.25", Some(6.0)),
        ];
        let series = dataset_series(&points, HistoryDataset::BattleRating);
        assert_eq!(series, vec![Some(5.7), None, Some(6.0)]);

        let repair = dataset_series(&points, HistoryDataset::RepairCost);
        assert_eq!(repair, vec![Some(570.0), None, Some(600.0)]);
    }
}
