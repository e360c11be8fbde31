//! Comparison view state
//!
//! Explicit state object for the side-by-side comparison view: two slots,
//! each with its own filter context, selection and fetched detail record.
//! Constructed fresh per view session and owned by the presentation
//! component; the resolver/filter/normalizer functions it delegates to stay
//! pure.
//!
//! Detail fetches are asynchronous and are never cancelled, so each slot
//! carries a request sequence number. [`ComparisonState::select`] hands out a
//! token for the fetch it triggers and [`ComparisonState::apply_detail`]
//! discards any result whose token is no longer current, so an out-of-order
//! resolution cannot overwrite fresher state.

use crate::filter::{matches_type, CatalogFilter, ALL};
use crate::normalize::{normalize_fixed, normalize_pairwise, MetricPoint};
use crate::resolve::{
    resolve_battle_rating, resolve_image, resolve_metric, resolve_speed, BattleRating, Metric,
};
use crate::vehicle::{GameMode, VehicleRecord};

/// One of the two comparison slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    /// Both slots, for iteration
    pub const BOTH: [Slot; 2] = [Slot::Left, Slot::Right];

    fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Right => 1,
        }
    }
}

/// Handle for an in-flight detail fetch. Stale tokens are rejected by
/// [`ComparisonState::apply_detail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    slot: Slot,
    seq: u64,
}

impl FetchToken {
    /// Slot this fetch belongs to
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

#[derive(Debug, Default)]
struct SlotState {
    filter: CatalogFilter,
    selected: Option<String>,
    details: Option<VehicleRecord>,
    /// Bumped on every selection change; in-flight fetches carry the value
    /// current at issue time.
    seq: u64,
}

/// State for the comparison view: two independent slots.
#[derive(Debug, Default)]
pub struct ComparisonState {
    slots: [SlotState; 2],
}

impl ComparisonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter context of a slot
    pub fn filter(&self, slot: Slot) -> &CatalogFilter {
        &self.slots[slot.index()].filter
    }

    /// Currently selected identifier of a slot, if any
    pub fn selected(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].selected.as_deref()
    }

    /// Fetched detail record of a slot, if the fetch has completed
    pub fn details(&self, slot: Slot) -> Option<&VehicleRecord> {
        self.slots[slot.index()].details.as_ref()
    }

    /// Records visible in a slot's selection list under its current filter
    pub fn visible<'a>(&self, slot: Slot, catalog: &'a [VehicleRecord]) -> Vec<&'a VehicleRecord> {
        self.slots[slot.index()].filter.apply(catalog)
    }

    /// Update a slot's search query
    pub fn set_search(&mut self, slot: Slot, query: impl Into<String>) {
        self.slots[slot.index()].filter.search = query.into();
    }

    /// Update a slot's nation filter
    pub fn set_nation(&mut self, slot: Slot, nation: impl Into<String>) {
        self.slots[slot.index()].filter.nation = nation.into();
    }

    /// Update a slot's type filter.
    ///
    /// Changing to a non-"All" value deselects any currently selected vehicle
    /// in either slot whose type no longer matches, so a stale selection
    /// cannot survive outside its filtered set. The record backing a
    /// selection is looked up in the catalog by identifier, falling back to
    /// the slot's fetched details.
    pub fn set_type_filter(
        &mut self,
        slot: Slot,
        selected_type: impl Into<String>,
        catalog: &[VehicleRecord],
    ) {
        let selected_type = selected_type.into();
        self.slots[slot.index()].filter.vehicle_type = selected_type.clone();

        if selected_type == ALL {
            return;
        }

        for other in Slot::BOTH {
            let state = &self.slots[other.index()];
            let Some(identifier) = state.selected.as_deref() else {
                continue;
            };
            let record = catalog
                .iter()
                .find(|r| r.identifier == identifier)
                .or(state.details.as_ref());
            let still_matches = record
                .map(|r| matches_type(r, &selected_type))
                .unwrap_or(false);
            if !still_matches {
                self.deselect(other);
            }
        }
    }

    /// Select a vehicle in a slot (or clear the selection with `None`).
    ///
    /// Clears any previously fetched details and returns a token for the
    /// detail fetch the caller should now issue. Returns `None` when
    /// deselecting; the sequence still advances so an in-flight fetch for
    /// the old selection gets discarded.
    pub fn select(&mut self, slot: Slot, identifier: Option<&str>) -> Option<FetchToken> {
        let state = &mut self.slots[slot.index()];
        state.seq += 1;
        state.details = None;
        state.selected = identifier.map(str::to_string);
        if state.selected.is_some() {
            Some(FetchToken {
                slot,
                seq: state.seq,
            })
        } else {
            None
        }
    }

    fn deselect(&mut self, slot: Slot) {
        self.select(slot, None);
    }

    /// Store the result of a detail fetch.
    ///
    /// A `None` result (failed fetch) still clears the slot's details, so
    /// derived fields report their sentinels instead of stale values.
    /// Returns `false` when the token is stale and the result was discarded.
    pub fn apply_detail(&mut self, token: FetchToken, result: Option<VehicleRecord>) -> bool {
        let state = &mut self.slots[token.slot.index()];
        if token.seq != state.seq {
            tracing::debug!(slot = ?token.slot, "discarding stale detail result");
            return false;
        }
        state.details = result;
        true
    }

    /// Display image URL for a slot (placeholder when unresolved)
    pub fn image(&self, slot: Slot) -> &str {
        resolve_image(self.details(slot))
    }

    /// Top speed for a slot (0 when unresolved)
    pub fn speed(&self, slot: Slot) -> f64 {
        resolve_speed(self.details(slot))
    }

    /// Battle rating for a slot under a mode and ground-battle flag
    pub fn battle_rating(&self, slot: Slot, mode: GameMode, ground_battle: bool) -> BattleRating {
        resolve_battle_rating(self.details(slot), mode, ground_battle)
    }

    /// Raw metric value for a slot
    pub fn metric(&self, slot: Slot, metric: Metric) -> f64 {
        resolve_metric(self.details(slot), metric)
    }

    /// Radar series for one slot against the fixed reference maxima
    pub fn radar_fixed(&self, slot: Slot, metrics: &[Metric]) -> Vec<MetricPoint> {
        normalize_fixed(self.details(slot), metrics)
    }

    /// Radar series for both slots against their pairwise maxima
    pub fn radar_pairwise(&self, metrics: &[Metric]) -> (Vec<MetricPoint>, Vec<MetricPoint>) {
        normalize_pairwise(self.details(Slot::Left), self.details(Slot::Right), metrics)
    }
}
