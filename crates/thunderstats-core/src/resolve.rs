//! Field resolution
//!
//! Pure functions deriving display-ready values from a vehicle record via
//! ordered fallback chains. Every resolver is total over all record shapes,
//! including the record itself being absent (failed detail fetch): absence
//! degrades to the placeholder image, a zero speed/metric, or the "N/A"
//! battle-rating sentinel. The presentation layer never special-cases a
//! missing field itself.

use crate::vehicle::{GameMode, VehicleRecord};

/// Image shown when a record has no usable image URL (or is absent entirely)
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/200";

/// Comparable metrics a record exposes for radar-chart comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Vehicle mass, resolved in metric tons
    Mass,
    /// Realistic-mode repair cost
    Repair,
    /// Total crew count
    Crew,
    /// Research point cost
    Research,
}

impl Metric {
    /// All metrics, in chart axis order
    pub const ALL: [Metric; 4] = [Metric::Mass, Metric::Repair, Metric::Crew, Metric::Research];
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Mass => write!(f, "Mass"),
            Metric::Repair => write!(f, "Repair"),
            Metric::Crew => write!(f, "Crew"),
            Metric::Research => write!(f, "Research"),
        }
    }
}

/// A resolved battle rating, or the explicit "N/A" sentinel when the field
/// is absent from the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BattleRating {
    Known(f64),
    Unavailable,
}

impl BattleRating {
    /// Numeric value, `None` for the sentinel
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BattleRating::Known(v) => Some(*v),
            BattleRating::Unavailable => None,
        }
    }
}

impl std::fmt::Display for BattleRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleRating::Known(v) => write!(f, "{v}"),
            BattleRating::Unavailable => write!(f, "N/A"),
        }
    }
}

impl From<Option<f64>> for BattleRating {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => BattleRating::Known(v),
            None => BattleRating::Unavailable,
        }
    }
}

/// Resolve a vehicle's display image URL.
///
/// Fixed priority: image, preview_image, image_2, image_3, thumbnail.
/// Falls back to [`PLACEHOLDER_IMAGE_URL`] when the record or every image
/// field is absent.
pub fn resolve_image(record: Option<&VehicleRecord>) -> &str {
    let Some(images) = record.and_then(|r| r.images.as_ref()) else {
        return PLACEHOLDER_IMAGE_URL;
    };
    [
        &images.image,
        &images.preview_image,
        &images.image_2,
        &images.image_3,
        &images.thumbnail,
    ]
    .into_iter()
    .find_map(|url| url.as_deref())
    .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

/// Resolve a vehicle's top speed.
///
/// A positive ground-engine speed wins over a positive aerodynamic altitude
/// speed; records only meaningfully populate one of the two. Returns 0 when
/// neither source is present.
pub fn resolve_speed(record: Option<&VehicleRecord>) -> f64 {
    let Some(record) = record else { return 0.0 };

    let engine_speed = record.engine.as_ref().and_then(|e| e.max_speed_rb_sb);
    if let Some(speed) = engine_speed.filter(|s| *s > 0.0) {
        return speed;
    }

    let altitude_speed = record
        .aerodynamics
        .as_ref()
        .and_then(|a| a.max_speed_at_altitude);
    altitude_speed.filter(|s| *s > 0.0).unwrap_or(0.0)
}

/// Resolve the battle rating for a mode.
///
/// Aircraft evaluated under ground-battle rules use the ground-context BR
/// fields for Realistic/Simulator; Arcade has no ground-specific variant and
/// always uses the plain field.
pub fn resolve_battle_rating(
    record: Option<&VehicleRecord>,
    mode: GameMode,
    ground_battle: bool,
) -> BattleRating {
    let Some(record) = record else {
        return BattleRating::Unavailable;
    };

    let value = if record.is_aircraft() && ground_battle {
        match mode {
            GameMode::Arcade => record.arcade_br,
            GameMode::Realistic => record.realistic_ground_br,
            GameMode::Simulator => record.simulator_ground_br,
        }
    } else {
        match mode {
            GameMode::Arcade => record.arcade_br,
            GameMode::Realistic => record.realistic_br,
            GameMode::Simulator => record.simulator_br,
        }
    };
    value.into()
}

/// Resolve a raw metric value, zero-defaulted.
///
/// Mass is converted from kilograms to metric tons here so the comparison
/// axes stay in the same order of magnitude.
pub fn resolve_metric(record: Option<&VehicleRecord>, metric: Metric) -> f64 {
    let Some(record) = record else { return 0.0 };
    match metric {
        Metric::Mass => record.mass.map(|kg| kg / 1000.0).unwrap_or(0.0),
        Metric::Repair => record.repair_cost_realistic.unwrap_or(0.0),
        Metric::Crew => record.crew_total_count.map(f64::from).unwrap_or(0.0),
        Metric::Research => record.req_exp.unwrap_or(0.0),
    }
}
