//! # Emissions Result
//!
//! The value object returned by the estimator, and the rounding policy that
//! produces it from raw per-category sums.
//!
//! ## Rounding Order
//!
//! Each category sum is rounded to one decimal independently, and the total
//! is rounded from the *unrounded* sum of the four categories. The reported
//! total can therefore differ from the sum of the reported categories by up
//! to 0.2 kg. Percentages are computed from raw values as well.
//!
//! ## Finite Output
//!
//! Sums saturate at `f64::MAX` and rounding leaves values too large to scale
//! untouched, so every figure in an [`EmissionsResult`] is finite and
//! serializes as a JSON number.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Round half-up to one decimal place.
///
/// All inputs are non-negative, where `f64::round` (half away from zero)
/// coincides with half-up. Values beyond 2^53 have no fractional part, so
/// one whose scaling would overflow is returned as is.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 10.0
}

/// Add two non-negative amounts, saturating at `f64::MAX`.
pub(crate) fn saturating_add(a: f64, b: f64) -> f64 {
    (a + b).min(f64::MAX)
}

/// Whole-number share of `part` in `total`; zero when `total` is zero.
pub(crate) fn percentage_of(part: f64, total: f64) -> u8 {
    if total == 0.0 {
        return 0;
    }
    (part / total * 100.0).round() as u8
}

/// Unrounded per-category sums in kg CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawEmissions {
    /// Raw transport sum.
    pub transport: f64,
    /// Raw electricity sum.
    pub electricity: f64,
    /// Raw waste sum.
    pub waste: f64,
    /// Raw food sum.
    pub food: f64,
}

impl RawEmissions {
    /// Unrounded grand total, summed in canonical category order and
    /// saturating at `f64::MAX`.
    pub fn total(&self) -> f64 {
        [self.electricity, self.waste, self.food]
            .into_iter()
            .fold(self.transport, saturating_add)
    }

    /// Raw sum for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Electricity => self.electricity,
            Category::Waste => self.waste,
            Category::Food => self.food,
        }
    }
}

/// Reported figures for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEmissions {
    /// Emissions rounded to one decimal.
    #[serde(rename = "emissionsKgCO2e")]
    pub emissions_kg_co2e: f64,
    /// Share of the total, 0–100.
    pub percentage_of_total: u8,
}

/// Per-category breakdown keyed by category name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Transport figures.
    pub transport: CategoryEmissions,
    /// Electricity figures.
    pub electricity: CategoryEmissions,
    /// Waste figures.
    pub waste: CategoryEmissions,
    /// Food figures.
    pub food: CategoryEmissions,
}

impl Breakdown {
    /// Figures for one category.
    pub fn get(&self, category: Category) -> &CategoryEmissions {
        match category {
            Category::Transport => &self.transport,
            Category::Electricity => &self.electricity,
            Category::Waste => &self.waste,
            Category::Food => &self.food,
        }
    }

    /// Iterate categories with their figures in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryEmissions)> + '_ {
        Category::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of the four reported percentages.
    pub fn percentage_sum(&self) -> u32 {
        self.iter().map(|(_, e)| u32::from(e.percentage_of_total)).sum()
    }
}

/// Estimated emissions with a per-category breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsResult {
    /// Grand total rounded to one decimal.
    #[serde(rename = "totalKgCO2e")]
    pub total_kg_co2e: f64,
    /// Per-category figures.
    pub breakdown: Breakdown,
}

impl EmissionsResult {
    /// Apply the rounding and percentage policy to raw sums.
    pub fn from_raw(raw: &RawEmissions) -> Self {
        let total = raw.total();
        let category = |value: f64| CategoryEmissions {
            emissions_kg_co2e: round_to_tenth(value),
            percentage_of_total: percentage_of(value, total),
        };
        Self {
            total_kg_co2e: round_to_tenth(total),
            breakdown: Breakdown {
                transport: category(raw.transport),
                electricity: category(raw.electricity),
                waste: category(raw.waste),
                food: category(raw.food),
            },
        }
    }

    /// Whether nothing was emitted.
    pub fn is_zero(&self) -> bool {
        self.total_kg_co2e == 0.0
    }
}
