//! Demo catalog - fixed vehicle data for UI testing
//!
//! A small catalog spanning tanks, aircraft and naval vessels across nations,
//! with deliberately uneven field population (matching how the live API
//! serves records), so the UI can be exercised without network access.

use crate::vehicle::{AerodynamicsStats, EngineStats, VehicleImages, VehicleRecord};

/// Build the demo catalog.
pub fn sample_catalog() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            identifier: "m1_abrams".to_string(),
            country: Some("USA".to_string()),
            vehicle_type: Some("medium_tank".to_string()),
            era: Some(serde_json::json!(7)),
            arcade_br: Some(10.3),
            realistic_br: Some(10.3),
            simulator_br: Some(10.3),
            images: Some(VehicleImages {
                image: Some("https://static.encyclopedia.warthunder.com/images/m1_abrams.png".to_string()),
                thumbnail: Some("https://static.encyclopedia.warthunder.com/images/m1_abrams_thumb.png".to_string()),
                ..Default::default()
            }),
            engine: Some(EngineStats {
                max_speed_rb_sb: Some(67.0),
            }),
            mass: Some(54_430.0),
            value: Some(3_920_000.0),
            repair_cost_arcade: Some(1_340.0),
            repair_cost_realistic: Some(1_590.0),
            crew_total_count: Some(4),
            req_exp: Some(9_800.0),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "abrams_x".to_string(),
            country: Some("USA".to_string()),
            vehicle_type: Some("medium_tank".to_string()),
            is_premium: true,
            era: Some(serde_json::json!(8)),
            arcade_br: Some(11.0),
            realistic_br: Some(11.0),
            engine: Some(EngineStats {
                max_speed_rb_sb: Some(72.0),
            }),
            mass: Some(49_900.0),
            crew_total_count: Some(3),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "t_34".to_string(),
            country: Some("Russia".to_string()),
            vehicle_type: Some("medium_tank".to_string()),
            era: Some(serde_json::json!(2)),
            arcade_br: Some(3.7),
            realistic_br: Some(3.7),
            simulator_br: Some(3.7),
            images: Some(VehicleImages {
                preview_image: Some("https://static.encyclopedia.warthunder.com/images/t_34.png".to_string()),
                ..Default::default()
            }),
            engine: Some(EngineStats {
                max_speed_rb_sb: Some(54.0),
            }),
            mass: Some(28_000.0),
            repair_cost_realistic: Some(740.0),
            crew_total_count: Some(4),
            req_exp: Some(5_900.0),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "p_51d_30".to_string(),
            country: Some("USA".to_string()),
            vehicle_type: Some("fighter".to_string()),
            era: Some(serde_json::json!(4)),
            arcade_br: Some(4.3),
            realistic_br: Some(4.7),
            realistic_ground_br: Some(5.0),
            simulator_br: Some(5.0),
            simulator_ground_br: Some(5.3),
            aerodynamics: Some(AerodynamicsStats {
                max_speed_at_altitude: Some(708.0),
            }),
            mass: Some(4_581.0),
            repair_cost_realistic: Some(1_160.0),
            crew_total_count: Some(1),
            req_exp: Some(7_300.0),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "ju_87d_5".to_string(),
            country: Some("Germany".to_string()),
            vehicle_type: Some("strike_aircraft".to_string()),
            vehicle_sub_types: vec!["bomber".to_string()],
            era: Some(serde_json::json!(3)),
            arcade_br: Some(2.7),
            realistic_br: Some(3.0),
            realistic_ground_br: Some(3.3),
            aerodynamics: Some(AerodynamicsStats {
                max_speed_at_altitude: Some(408.0),
            }),
            mass: Some(4_390.0),
            crew_total_count: Some(2),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "pt_109".to_string(),
            country: Some("USA".to_string()),
            vehicle_type: Some("boat".to_string()),
            vehicle_sub_types: vec!["naval_ferry_barge".to_string()],
            era: Some(serde_json::json!("1")),
            arcade_br: Some(1.0),
            realistic_br: Some(1.0),
            mass: Some(56_000.0),
            crew_total_count: Some(12),
            ..Default::default()
        },
        VehicleRecord {
            identifier: "ikl_class_destroyer".to_string(),
            country: Some("Germany".to_string()),
            vehicle_type: Some("destroyer".to_string()),
            era: Some(serde_json::json!(3)),
            realistic_br: Some(4.0),
            mass: Some(2_400_000.0),
            crew_total_count: Some(330),
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matches_type;

    #[test]
    fn catalog_spans_the_grouping_categories() {
        let catalog = sample_catalog();
        assert!(catalog.iter().any(|r| matches_type(r, "Plane")));
        assert!(catalog.iter().any(|r| matches_type(r, "Naval")));
        assert!(catalog.iter().any(|r| matches_type(r, "Tank")));
    }

    #[test]
    fn identifiers_are_unique() {
        let catalog = sample_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|r| r.identifier.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
