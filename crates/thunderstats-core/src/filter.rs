//! Catalog filtering and search
//!
//! Narrows the vehicle catalog by type, nation and fuzzy identifier search.
//! The three predicates compose by AND. A [`CatalogFilter`] is plain owned
//! state, so each comparison slot carries its own instance without sharing.
//!
//! Search semantics: both the query and the identifier are normalized
//! (underscores become spaces, lowercased) and the query must match at a word
//! boundary within the identifier. "abrams" matches `m1_abrams`; the
//! mid-token "bram" does not.

use regex::Regex;

use crate::vehicle::{VehicleRecord, AIRCRAFT_TYPES, NAVAL_TYPES};

/// Wildcard value accepted by the type and nation filters
pub const ALL: &str = "All";

/// Grouping category matching any aircraft type
pub const PLANE_GROUP: &str = "Plane";

/// Grouping category matching any naval type
pub const NAVAL_GROUP: &str = "Naval";

/// One slot's filter state: type, nation and search query.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    /// Selected type, [`ALL`], a grouping category, or a concrete type name
    pub vehicle_type: String,
    /// Selected nation or [`ALL`]
    pub nation: String,
    /// Fuzzy identifier query, empty for no filtering
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter {
            vehicle_type: ALL.to_string(),
            nation: ALL.to_string(),
            search: String::new(),
        }
    }
}

impl CatalogFilter {
    /// Whether a record passes all three predicates.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        matches_type(record, &self.vehicle_type)
            && matches_nation(record, &self.nation)
            && matches_search(record, &self.search)
    }

    /// Narrow a catalog to the records passing this filter.
    pub fn apply<'a>(&self, catalog: &'a [VehicleRecord]) -> Vec<&'a VehicleRecord> {
        let search_re = search_regex(&self.search);
        catalog
            .iter()
            .filter(|r| {
                matches_type(r, &self.vehicle_type)
                    && matches_nation(r, &self.nation)
                    && matches_search_re(r, search_re.as_ref())
            })
            .collect()
    }
}

/// Type filter predicate.
///
/// [`ALL`] passes everything. The "Plane" and "Naval" grouping categories
/// match a fixed alias set against the primary type or any sub-type; any
/// other selection falls back to case-insensitive substring containment on
/// the primary type or exact membership in the sub-types.
pub fn matches_type(record: &VehicleRecord, selected: &str) -> bool {
    if selected == ALL {
        return true;
    }

    if selected.eq_ignore_ascii_case(PLANE_GROUP) {
        return matches_alias_set(record, AIRCRAFT_TYPES);
    }
    if selected.eq_ignore_ascii_case(NAVAL_GROUP) {
        return matches_alias_set(record, NAVAL_TYPES);
    }

    let selected_lower = selected.to_lowercase();
    let primary = record
        .vehicle_type
        .as_deref()
        .map(|t| t.to_lowercase().contains(&selected_lower))
        .unwrap_or(false);
    primary
        || record
            .vehicle_sub_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(selected))
}

fn matches_alias_set(record: &VehicleRecord, aliases: &[&str]) -> bool {
    let primary = record
        .vehicle_type
        .as_deref()
        .map(|t| aliases.iter().any(|a| t.eq_ignore_ascii_case(a)))
        .unwrap_or(false);
    primary
        || record
            .vehicle_sub_types
            .iter()
            .any(|t| aliases.iter().any(|a| t.eq_ignore_ascii_case(a)))
}

/// Nation filter predicate: [`ALL`] passes, otherwise case-insensitive exact
/// match on the record's country.
pub fn matches_nation(record: &VehicleRecord, nation: &str) -> bool {
    if nation == ALL {
        return true;
    }
    record
        .country
        .as_deref()
        .map(|c| c.eq_ignore_ascii_case(nation))
        .unwrap_or(false)
}

/// Search predicate: empty query passes, otherwise word-boundary-anchored
/// prefix match on the normalized identifier.
pub fn matches_search(record: &VehicleRecord, query: &str) -> bool {
    matches_search_re(record, search_regex(query).as_ref())
}

fn matches_search_re(record: &VehicleRecord, re: Option<&Regex>) -> bool {
    let Some(re) = re else { return true };
    re.is_match(&normalize_identifier(&record.identifier))
}

/// Build the word-boundary regex for a query, `None` for an empty query.
fn search_regex(query: &str) -> Option<Regex> {
    let normalized = normalize_identifier(query);
    if normalized.trim().is_empty() {
        return None;
    }
    // The escaped query cannot produce an invalid pattern; treat a build
    // failure like an empty query.
    Regex::new(&format!(r"\b{}", regex::escape(&normalized))).ok()
}

fn normalize_identifier(raw: &str) -> String {
    raw.replace('_', " ").to_lowercase()
}
