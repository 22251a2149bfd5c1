//! # Result Insights
//!
//! Read-only views derived from an [`EmissionsResult`]: which categories
//! dominate, what to do about them, and the mean of a user's past totals.
//! None of these feed back into the estimate.

use serde::Serialize;

use crate::category::Category;
use crate::result::{round_to_tenth, EmissionsResult};

/// Categories that may contribute tips. The highest-ranked one contributes two.
const MAX_TIP_CATEGORIES: usize = 3;

const TRANSPORT_TIPS: [&str; 5] = [
    "Use public transportation or carpooling to reduce individual emissions",
    "Consider walking or cycling for short distances",
    "If possible, invest in a more fuel-efficient vehicle or electric vehicle",
    "Combine errands to reduce the number of trips",
    "Maintain your vehicle properly to ensure optimal fuel efficiency",
];

const ELECTRICITY_TIPS: [&str; 5] = [
    "Switch to energy-efficient LED light bulbs",
    "Unplug electronics when not in use to avoid phantom power usage",
    "Use smart power strips to automatically cut power to devices",
    "Adjust your thermostat to use less heating or cooling when away",
    "Consider switching to renewable energy sources if available",
];

const WASTE_TIPS: [&str; 5] = [
    "Implement a comprehensive recycling program at home",
    "Start composting food scraps and yard waste",
    "Reduce single-use plastics by using reusable alternatives",
    "Buy products with minimal packaging",
    "Donate or repurpose items instead of throwing them away",
];

const FOOD_TIPS: [&str; 5] = [
    "Consider reducing meat consumption, especially red meat",
    "Buy local and seasonal produce to reduce transportation emissions",
    "Plan meals to reduce food waste",
    "Grow your own herbs and vegetables if possible",
    "Choose products with sustainable packaging",
];

impl Category {
    /// Reduction tips for this category, most impactful first.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::Transport => &TRANSPORT_TIPS,
            Self::Electricity => &ELECTRICITY_TIPS,
            Self::Waste => &WASTE_TIPS,
            Self::Food => &FOOD_TIPS,
        }
    }
}

/// A category with non-zero emissions, in ranking position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCategory {
    /// The category.
    pub category: Category,
    /// Reported (rounded) emissions.
    #[serde(rename = "emissionsKgCO2e")]
    pub emissions_kg_co2e: f64,
    /// Reported share of the total.
    pub percentage_of_total: u8,
}

/// Categories with reported emissions above zero, largest first.
///
/// The sort is stable, so equal emissions keep canonical category order.
pub fn ranked_categories(result: &EmissionsResult) -> Vec<RankedCategory> {
    let mut ranked: Vec<RankedCategory> = result
        .breakdown
        .iter()
        .filter(|(_, e)| e.emissions_kg_co2e > 0.0)
        .map(|(category, e)| RankedCategory {
            category,
            emissions_kg_co2e: e.emissions_kg_co2e,
            percentage_of_total: e.percentage_of_total,
        })
        .collect();
    ranked.sort_by(|a, b| b.emissions_kg_co2e.total_cmp(&a.emissions_kg_co2e));
    ranked
}

/// Personalized reduction tips for a result.
///
/// Takes the top three ranked categories: the first contributes its two
/// leading tips and the others one each, so at most four tips come back.
/// Empty when nothing was emitted.
pub fn reduction_tips(result: &EmissionsResult) -> Vec<&'static str> {
    ranked_categories(result)
        .iter()
        .take(MAX_TIP_CATEGORIES)
        .enumerate()
        .flat_map(|(rank, r)| {
            let take = if rank == 0 { 2 } else { 1 };
            r.category.tips().iter().take(take).copied()
        })
        .collect()
}

/// Mean reported total over earlier results, rounded to one decimal.
///
/// Returns `0.0` for an empty history.
pub fn average_total(history: &[EmissionsResult]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let sum = history.iter().fold(0.0, |acc, r| acc + r.total_kg_co2e);
    round_to_tenth(sum / history.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RawEmissions;

    fn result(transport: f64, electricity: f64, waste: f64, food: f64) -> EmissionsResult {
        EmissionsResult::from_raw(&RawEmissions {
            transport,
            electricity,
            waste,
            food,
        })
    }

    #[test]
    fn ranking_skips_zero_categories() {
        let ranked = ranked_categories(&result(0.0, 50.0, 20.0, 100.0));
        let order: Vec<Category> = ranked.iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Food, Category::Electricity, Category::Waste]);
        assert_eq!(ranked[0].percentage_of_total, 59);
    }

    #[test]
    fn ranking_ties_keep_canonical_order() {
        let ranked = ranked_categories(&result(10.0, 0.0, 10.0, 10.0));
        let order: Vec<Category> = ranked.iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Transport, Category::Waste, Category::Food]);
    }

    #[test]
    fn ranking_uses_reported_values() {
        // 0.04 rounds to 0.0 and drops out.
        let ranked = ranked_categories(&result(0.04, 1.0, 0.0, 0.0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, Category::Electricity);
    }

    #[test]
    fn no_tips_for_zero_result() {
        assert!(reduction_tips(&EmissionsResult::default()).is_empty());
        assert!(ranked_categories(&EmissionsResult::default()).is_empty());
    }

    #[test]
    fn top_category_gets_two_tips() {
        let tips = reduction_tips(&result(10.0, 0.0, 0.0, 0.0));
        assert_eq!(tips, TRANSPORT_TIPS[..2].to_vec());
    }

    #[test]
    fn at_most_three_categories_contribute() {
        let tips = reduction_tips(&result(1.0, 4.0, 2.0, 3.0));
        assert_eq!(
            tips,
            vec![
                ELECTRICITY_TIPS[0],
                ELECTRICITY_TIPS[1],
                FOOD_TIPS[0],
                WASTE_TIPS[0],
            ]
        );
    }

    #[test]
    fn every_category_has_five_tips() {
        for category in Category::all() {
            assert_eq!(category.tips().len(), 5, "{category}");
        }
    }

    #[test]
    fn ranked_category_serializes_camel_case() {
        let ranked = ranked_categories(&result(0.0, 0.0, 20.0, 0.0));
        let json = serde_json::to_value(ranked[0]).unwrap();
        assert_eq!(json["category"], "waste");
        assert_eq!(json["emissionsKgCO2e"], 20.0);
        assert_eq!(json["percentageOfTotal"], 100);
    }

    #[test]
    fn average_of_empty_history_is_zero() {
        assert_eq!(average_total(&[]), 0.0);
    }

    #[test]
    fn average_rounds_to_tenth() {
        let history = [
            result(10.0, 0.0, 0.0, 0.0),
            result(0.0, 20.0, 0.0, 0.0),
            result(0.0, 0.0, 0.0, 5.5),
        ];
        // (10 + 20 + 5.5) / 3 = 11.8333...
        assert_eq!(average_total(&history), 11.8);
    }
}
