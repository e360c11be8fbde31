//! Vehicle data model
//!
//! Typed representation of the records returned by the War Thunder vehicles
//! API. Upstream records are heterogeneous: which fields are populated depends
//! on the vehicle category (ground vs. air vs. naval), so every field except
//! `identifier` tolerates absence at decode time. Downstream code never has to
//! re-check whether a field exists; it goes through the resolvers in
//! [`crate::resolve`] instead.

use serde::{Deserialize, Serialize};

/// Primary types that count as aircraft for BR selection and the "Plane"
/// grouping filter.
pub const AIRCRAFT_TYPES: &[&str] = &[
    "fighter",
    "bomber",
    "interceptor",
    "jet",
    "strike_aircraft",
    "attacker",
    "assault",
];

/// Primary types that count as naval vessels for the "Naval" grouping filter.
pub const NAVAL_TYPES: &[&str] = &[
    "destroyer",
    "light_cruiser",
    "heavy_cruiser",
    "battlecruiser",
    "battleship",
    "frigate",
    "barge",
    "boat",
    "heavy_boat",
];

/// Game mode a battle rating applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Arcade,
    Realistic,
    Simulator,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Arcade => write!(f, "Arcade"),
            GameMode::Realistic => write!(f, "Realistic"),
            GameMode::Simulator => write!(f, "Simulator"),
        }
    }
}

/// Image URLs attached to a vehicle record. Any key may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleImages {
    pub image: Option<String>,
    pub preview_image: Option<String>,
    pub image_2: Option<String>,
    pub image_3: Option<String>,
    pub thumbnail: Option<String>,
}

/// Engine block of a record. Populated for ground vehicles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineStats {
    pub max_speed_rb_sb: Option<f64>,
}

/// Aerodynamics block of a record. Populated for aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AerodynamicsStats {
    pub max_speed_at_altitude: Option<f64>,
}

/// A single vehicle record as returned by the vehicles API.
///
/// `identifier` is the only stable join key between the catalog listing and a
/// detail fetch. Records are read-only snapshots; nothing in this crate
/// mutates them after decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique key, underscore-separated tokens (e.g. `m1_abrams`).
    pub identifier: String,

    /// Nation/faction label.
    pub country: Option<String>,

    /// Primary category (e.g. "fighter", "medium_tank").
    pub vehicle_type: Option<String>,

    /// Secondary category aliases, in upstream order.
    #[serde(default)]
    pub vehicle_sub_types: Vec<String>,

    #[serde(default)]
    pub is_premium: bool,

    /// Tier/rank label. The API serves this as either a string or a number,
    /// so it is kept raw; use [`VehicleRecord::era_numeric`] or
    /// [`VehicleRecord::era_label`].
    pub era: Option<serde_json::Value>,

    pub arcade_br: Option<f64>,
    pub realistic_br: Option<f64>,
    pub simulator_br: Option<f64>,

    /// BR used when an aircraft is evaluated in a ground-battle context.
    pub realistic_ground_br: Option<f64>,
    pub simulator_ground_br: Option<f64>,

    pub images: Option<VehicleImages>,

    pub engine: Option<EngineStats>,
    pub aerodynamics: Option<AerodynamicsStats>,

    /// Mass in kilograms.
    pub mass: Option<f64>,

    /// In-game currency cost.
    pub value: Option<f64>,

    pub repair_cost_arcade: Option<f64>,
    pub repair_cost_realistic: Option<f64>,
    pub repair_cost_sl: Option<f64>,

    pub crew_total_count: Option<u32>,

    /// Research point cost.
    pub req_exp: Option<f64>,
}

impl VehicleRecord {
    /// Whether this record is an aircraft-like type (primary type or any
    /// sub-type in [`AIRCRAFT_TYPES`]).
    pub fn is_aircraft(&self) -> bool {
        let primary = self
            .vehicle_type
            .as_deref()
            .map(|t| AIRCRAFT_TYPES.iter().any(|a| t.eq_ignore_ascii_case(a)))
            .unwrap_or(false);
        primary
            || self
                .vehicle_sub_types
                .iter()
                .any(|t| AIRCRAFT_TYPES.iter().any(|a| t.eq_ignore_ascii_case(a)))
    }

    /// Era as a number, when the upstream value is numeric or a numeric
    /// string. Used by the timeline's rank series.
    pub fn era_numeric(&self) -> Option<f64> {
        match self.era.as_ref()? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Era as a display label, whatever shape the upstream value has.
    pub fn era_label(&self) -> Option<String> {
        match self.era.as_ref()? {
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_sparse_record() {
        // Only the identifier is required; everything else defaults.
        let record: VehicleRecord = serde_json::from_str(r#"{"identifier": "t_34"}"#).unwrap();
        assert_eq!(record.identifier, "t_34");
        assert!(record.country.is_none());
        assert!(record.vehicle_sub_types.is_empty());
        assert!(!record.is_premium);
        assert!(record.images.is_none());
    }

    #[test]
    fn decode_rejects_missing_identifier() {
        let result: Result<VehicleRecord, _> = serde_json::from_str(r#"{"country": "USA"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn aircraft_detection_via_sub_type() {
        let record = VehicleRecord {
            identifier: "ju_87".to_string(),
            vehicle_type: Some("dive_bomber".to_string()),
            vehicle_sub_types: vec!["bomber".to_string()],
            ..Default::default()
        };
        assert!(record.is_aircraft());

        let tank = VehicleRecord {
            identifier: "m1_abrams".to_string(),
            vehicle_type: Some("medium_tank".to_string()),
            ..Default::default()
        };
        assert!(!tank.is_aircraft());
    }

    #[test]
    fn era_accepts_string_and_number() {
        let numeric: VehicleRecord =
            serde_json::from_str(r#"{"identifier": "a", "era": 3}"#).unwrap();
        assert_eq!(numeric.era_numeric(), Some(3.0));
        assert_eq!(numeric.era_label().as_deref(), Some("3"));

        let string: VehicleRecord =
            serde_json::from_str(r#"{"identifier": "b", "era": "4"}"#).unwrap();
        assert_eq!(string.era_numeric(), Some(4.0));
    }
}
