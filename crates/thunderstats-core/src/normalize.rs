//! Metric normalization
//!
//! Rescales heterogeneous metrics onto a common 0–10 scale for multi-axis
//! (radar) comparison. Two modes:
//!
//! - fixed-reference: each metric divides by a constant reference maximum,
//!   so values are comparable across sessions. No clamping; a raw value
//!   above the reference yields a normalized value above 10.
//! - pairwise-dynamic: the two records being compared set the scale per
//!   metric, so the larger of the pair always reaches exactly 10.
//!
//! Raw values are preserved next to the normalized ones so tooltips can show
//! true units.

use crate::resolve::{resolve_metric, Metric};
use crate::vehicle::VehicleRecord;

/// One radar axis value: the metric, its raw value in true units, and the
/// 0–10 normalized value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricPoint {
    pub metric: Metric,
    pub raw: f64,
    pub normalized: f64,
}

/// Reference maximum used by fixed-reference normalization.
pub fn fixed_reference_max(metric: Metric) -> f64 {
    match metric {
        Metric::Mass => 10_000.0,
        Metric::Repair => 2_000.0,
        Metric::Crew => 10.0,
        Metric::Research => 10_000.0,
    }
}

/// Normalize the selected metrics of one record against the fixed reference
/// maxima.
pub fn normalize_fixed(record: Option<&VehicleRecord>, metrics: &[Metric]) -> Vec<MetricPoint> {
    metrics
        .iter()
        .map(|&metric| {
            let raw = resolve_metric(record, metric);
            MetricPoint {
                metric,
                raw,
                normalized: (raw / fixed_reference_max(metric)) * 10.0,
            }
        })
        .collect()
}

/// Normalize the selected metrics of two records against their pairwise
/// maxima.
///
/// The per-metric scale is `max(raw_a, raw_b, 1)`; the floor of 1 avoids a
/// division by zero when both sides are 0.
pub fn normalize_pairwise(
    a: Option<&VehicleRecord>,
    b: Option<&VehicleRecord>,
    metrics: &[Metric],
) -> (Vec<MetricPoint>, Vec<MetricPoint>) {
    let mut side_a = Vec::with_capacity(metrics.len());
    let mut side_b = Vec::with_capacity(metrics.len());

    for &metric in metrics {
        let raw_a = resolve_metric(a, metric);
        let raw_b = resolve_metric(b, metric);
        let local_max = raw_a.max(raw_b).max(1.0);

        side_a.push(MetricPoint {
            metric,
            raw: raw_a,
            normalized: (raw_a / local_max) * 10.0,
        });
        side_b.push(MetricPoint {
            metric,
            raw: raw_b,
            normalized: (raw_b / local_max) * 10.0,
        });
    }

    (side_a, side_b)
}
