//! # Emissions Estimator
//!
//! [`EmissionsEstimator::compute`] maps an [`ActivityInput`] to an
//! [`EmissionsResult`]. Each category runs the same reduction:
//!
//! ```text
//! entries → validity rule → unit conversion → × factor → Σ → round → % of total
//! ```
//!
//! The per-category steps live behind the [`EmissionSource`] trait, one impl
//! per entry type. An entry is excluded when its quantity fails the validity
//! rule, its selector was not recognized, or its contribution is not finite.
//! The estimator never fails and never mutates its input.

use crate::activity::{
    ActivityInput, ElectricityEntry, FoodEntry, TransportEntry, TransportMode, WasteEntry,
};
use crate::factors::{EateryType, ELECTRICITY_KG_CO2E_PER_KWH, WASTE_KG_CO2E_PER_BAG};
use crate::quantity::Quantity;
use crate::result::{saturating_add, EmissionsResult, RawEmissions};

/// An entry that converts one user-supplied quantity into kg CO2e.
pub trait EmissionSource {
    /// The quantity gating this entry's contribution.
    fn quantity(&self) -> &Quantity;

    /// kg CO2e for an already-validated, strictly positive quantity.
    fn kg_co2e(&self, quantity: f64) -> f64;

    /// Whether the entry's selectors name a known factor.
    fn is_recognized(&self) -> bool {
        true
    }

    /// Whether the entry would contribute emissions.
    fn is_usable(&self) -> bool {
        self.contribution().is_some()
    }

    /// This entry's emissions, or `None` if it is excluded.
    fn contribution(&self) -> Option<f64> {
        if !self.is_recognized() {
            return None;
        }
        self.quantity()
            .positive_value()
            .map(|q| self.kg_co2e(q))
            .filter(|kg| kg.is_finite())
    }
}

impl EmissionSource for TransportEntry {
    fn quantity(&self) -> &Quantity {
        &self.distance
    }

    fn is_recognized(&self) -> bool {
        self.mode != TransportMode::Unrecognized
    }

    fn kg_co2e(&self, distance: f64) -> f64 {
        self.distance_unit.to_km(distance) * self.mode.kg_co2e_per_km()
    }
}

impl EmissionSource for ElectricityEntry {
    fn quantity(&self) -> &Quantity {
        &self.consumption_kwh
    }

    fn kg_co2e(&self, kwh: f64) -> f64 {
        kwh * ELECTRICITY_KG_CO2E_PER_KWH
    }
}

impl EmissionSource for WasteEntry {
    fn quantity(&self) -> &Quantity {
        &self.bags_per_week
    }

    fn kg_co2e(&self, bags: f64) -> f64 {
        bags * WASTE_KG_CO2E_PER_BAG
    }
}

impl EmissionSource for FoodEntry {
    fn quantity(&self) -> &Quantity {
        &self.money_spent
    }

    fn is_recognized(&self) -> bool {
        self.eatery_type != EateryType::Unrecognized
    }

    fn kg_co2e(&self, spent: f64) -> f64 {
        spent * self.eatery_type.kg_co2e_per_money_unit()
    }
}

/// Raw sum of a category's contributions, in entry order.
///
/// Folds from `0.0` explicitly: an empty category must yield positive zero
/// so that it serializes as `0.0`, not `-0.0`. Saturates at `f64::MAX`.
fn category_sum<E: EmissionSource>(entries: &[E]) -> f64 {
    entries
        .iter()
        .filter_map(EmissionSource::contribution)
        .fold(0.0, saturating_add)
}

/// Stateless emissions estimator over the fixed factor tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmissionsEstimator;

impl EmissionsEstimator {
    /// Unrounded per-category sums.
    pub fn raw(&self, input: &ActivityInput) -> RawEmissions {
        RawEmissions {
            transport: category_sum(&input.transport_entries),
            electricity: category_sum(&input.electricity_entries),
            waste: category_sum(&input.waste_entries),
            food: category_sum(&input.food_entries),
        }
    }

    /// Estimate emissions for one input. Total; never fails.
    pub fn compute(&self, input: &ActivityInput) -> EmissionsResult {
        EmissionsResult::from_raw(&self.raw(input))
    }
}
