//! # Emission Factors
//!
//! Fixed coefficients converting an activity quantity into kg CO2e, plus
//! the selector enums that pick among them. The values are deliberately
//! simple round numbers: the engine is an explainable arithmetic transform,
//! not a validated carbon-accounting model, and factors are not localized
//! by region.
//!
//! | Category    | Selector          | kg CO2e per unit | Unit   |
//! |-------------|-------------------|------------------|--------|
//! | transport   | car, small        | 0.15             | km     |
//! | transport   | car, medium       | 0.20             | km     |
//! | transport   | car, large        | 0.30             | km     |
//! | transport   | bus               | 0.10             | km     |
//! | transport   | train             | 0.05             | km     |
//! | transport   | plane, economy    | 0.25             | km     |
//! | transport   | plane, business   | 0.50             | km     |
//! | transport   | plane, first      | 0.75             | km     |
//! | electricity | grid              | 0.5              | kWh    |
//! | waste       | garbage bag       | 10               | bag    |
//! | food        | home cooked       | 0.5              | money  |
//! | food        | fast food         | 1.2              | money  |
//! | food        | restaurant        | 2.0              | money  |

use serde::{Deserialize, Serialize};

use crate::activity::TransportMode;
use crate::category::Category;

/// Kilometres in one statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// kg CO2e per kWh of grid electricity.
pub const ELECTRICITY_KG_CO2E_PER_KWH: f64 = 0.5;

/// kg CO2e per standard garbage bag.
///
/// Applied to the weekly bag count as-is; no weekly-to-monthly scaling.
pub const WASTE_KG_CO2E_PER_BAG: f64 = 10.0;

/// Car size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    /// Compact or city car.
    Small,
    /// Mid-size car. Default when the class is omitted.
    #[default]
    Medium,
    /// SUV, van, or pickup.
    Large,
}

impl VehicleClass {
    /// kg CO2e per km driven.
    pub fn kg_co2e_per_km(&self) -> f64 {
        match self {
            Self::Small => 0.15,
            Self::Medium => 0.20,
            Self::Large => 0.30,
        }
    }

    /// All vehicle classes, smallest first.
    pub fn all() -> &'static [VehicleClass] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Cabin class of a flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    /// Economy cabin. Default when the class is omitted.
    #[default]
    Economy,
    /// Business cabin.
    Business,
    /// First-class cabin.
    First,
}

impl TravelClass {
    /// kg CO2e per passenger-km flown.
    pub fn kg_co2e_per_km(&self) -> f64 {
        match self {
            Self::Economy => 0.25,
            Self::Business => 0.50,
            Self::First => 0.75,
        }
    }

    /// All travel classes, cheapest first.
    pub fn all() -> &'static [TravelClass] {
        &[Self::Economy, Self::Business, Self::First]
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

/// Unit a travelled distance was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometres. Default when the unit is omitted.
    #[default]
    Km,
    /// Statute miles.
    Miles,
}

impl DistanceUnit {
    /// Convert a distance in this unit to kilometres.
    ///
    /// Kilometre values pass through untouched so that no rounding is
    /// introduced by a multiplication by one.
    pub fn to_km(&self, distance: f64) -> f64 {
        match self {
            Self::Km => distance,
            Self::Miles => distance * KM_PER_MILE,
        }
    }
}

/// Where food money was spent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EateryType {
    /// Groceries cooked at home. Default when the type is omitted.
    #[default]
    HomeCooked,
    /// Fast-food outlets.
    FastFood,
    /// Sit-down restaurants.
    Restaurant,
    /// A type name that matched none of the above. Has no factor; entries
    /// carrying it are excluded.
    Unrecognized,
}

impl EateryType {
    /// kg CO2e per unit of money spent.
    pub fn kg_co2e_per_money_unit(&self) -> f64 {
        match self {
            Self::HomeCooked => 0.5,
            Self::FastFood => 1.2,
            Self::Restaurant => 2.0,
            Self::Unrecognized => 0.0,
        }
    }

    /// All eatery types with a factor.
    pub fn all() -> &'static [EateryType] {
        &[Self::HomeCooked, Self::FastFood, Self::Restaurant]
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomeCooked => "homeCooked",
            Self::FastFood => "fastFood",
            Self::Restaurant => "restaurant",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// One row of the published factor catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorEntry {
    /// Category the factor belongs to.
    pub category: Category,
    /// Activity the factor applies to, e.g. `car/small` or `restaurant`.
    pub activity: String,
    /// kg CO2e emitted per unit.
    #[serde(rename = "kgCO2ePerUnit")]
    pub kg_co2e_per_unit: f64,
    /// Unit of the activity quantity.
    pub unit: &'static str,
}

impl FactorEntry {
    fn new(category: Category, activity: impl Into<String>, factor: f64, unit: &'static str) -> Self {
        Self {
            category,
            activity: activity.into(),
            kg_co2e_per_unit: factor,
            unit,
        }
    }
}

/// Every coefficient the estimator uses, in canonical category order.
pub fn factor_table() -> Vec<FactorEntry> {
    let mut rows = Vec::with_capacity(13);

    let modes = VehicleClass::all()
        .iter()
        .map(|c| TransportMode::Car(*c))
        .chain([TransportMode::Bus, TransportMode::Train])
        .chain(TravelClass::all().iter().map(|c| TransportMode::Plane(*c)));
    for mode in modes {
        rows.push(FactorEntry::new(
            Category::Transport,
            mode.label(),
            mode.kg_co2e_per_km(),
            "km",
        ));
    }

    rows.push(FactorEntry::new(
        Category::Electricity,
        "grid",
        ELECTRICITY_KG_CO2E_PER_KWH,
        "kWh",
    ));
    rows.push(FactorEntry::new(
        Category::Waste,
        "garbage_bag",
        WASTE_KG_CO2E_PER_BAG,
        "bag",
    ));

    for eatery in EateryType::all() {
        rows.push(FactorEntry::new(
            Category::Food,
            eatery.as_str(),
            eatery.kg_co2e_per_money_unit(),
            "money",
        ));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_factors() {
        assert_eq!(VehicleClass::Small.kg_co2e_per_km(), 0.15);
        assert_eq!(VehicleClass::Medium.kg_co2e_per_km(), 0.20);
        assert_eq!(VehicleClass::Large.kg_co2e_per_km(), 0.30);
    }

    #[test]
    fn plane_factors() {
        assert_eq!(TravelClass::Economy.kg_co2e_per_km(), 0.25);
        assert_eq!(TravelClass::Business.kg_co2e_per_km(), 0.50);
        assert_eq!(TravelClass::First.kg_co2e_per_km(), 0.75);
    }

    #[test]
    fn food_factors() {
        assert_eq!(EateryType::HomeCooked.kg_co2e_per_money_unit(), 0.5);
        assert_eq!(EateryType::FastFood.kg_co2e_per_money_unit(), 1.2);
        assert_eq!(EateryType::Restaurant.kg_co2e_per_money_unit(), 2.0);
    }

    #[test]
    fn km_passes_through() {
        assert_eq!(DistanceUnit::Km.to_km(123.456), 123.456);
    }

    #[test]
    fn miles_round_trip() {
        for miles in [0.1, 1.0, 26.2, 1000.0, 12_345.678] {
            let km = DistanceUnit::Miles.to_km(miles);
            let back = km / KM_PER_MILE;
            assert!(
                (back - miles).abs() <= miles * 1e-12,
                "{miles} mi -> {km} km -> {back} mi"
            );
        }
    }

    #[test]
    fn defaults_match_form_defaults() {
        assert_eq!(VehicleClass::default(), VehicleClass::Medium);
        assert_eq!(TravelClass::default(), TravelClass::Economy);
        assert_eq!(DistanceUnit::default(), DistanceUnit::Km);
        assert_eq!(EateryType::default(), EateryType::HomeCooked);
    }

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&EateryType::FastFood).unwrap(), "\"fastFood\"");
        assert_eq!(serde_json::to_string(&DistanceUnit::Miles).unwrap(), "\"miles\"");
        for eatery in EateryType::all() {
            let json = serde_json::to_string(eatery).unwrap();
            assert_eq!(json, format!("\"{}\"", eatery.as_str()));
        }
    }

    #[test]
    fn factor_table_covers_every_category() {
        let table = factor_table();
        assert_eq!(table.len(), 13);
        for category in Category::all() {
            assert!(table.iter().any(|row| row.category == *category), "{category}");
        }
        assert!(table.iter().all(|row| row.kg_co2e_per_unit > 0.0));
    }

    #[test]
    fn factor_table_rows_serialize_camel_case() {
        let json = serde_json::to_value(&factor_table()[0]).unwrap();
        assert_eq!(json["category"], "transport");
        assert_eq!(json["activity"], "car/small");
        assert_eq!(json["kgCO2ePerUnit"], 0.15);
        assert_eq!(json["unit"], "km");
    }
}
