#![deny(missing_docs)]

//! # footprint-core — Emissions Estimation Engine
//!
//! Turns a household's lifestyle inputs (transport legs, electricity
//! readings, garbage bags, food spending) into a monthly kg CO2e estimate
//! with a per-category breakdown. It has no internal crate dependencies and
//! performs no I/O: only `serde`, `serde_json`, `serde_yaml`, and `thiserror`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One validity rule.** Every category gates its entries through
//!    [`parse_positive_number`]. Empty, non-numeric, and non-positive fields
//!    exclude the entry; they never produce an error.
//!
//! 2. **Exhaustive factor lookup.** [`TransportMode`] carries the vehicle or
//!    travel class inside the variant that needs it, so the coefficient
//!    lookup is a total `match` with no optional-field checks.
//!
//! 3. **Single [`Category`] enum.** The four reporting categories are defined
//!    once. Breakdowns, rankings, and factor tables all key on it.
//!
//! 4. **Pure estimator.** [`EmissionsEstimator::compute`] borrows its input,
//!    allocates a fresh [`EmissionsResult`], and cannot fail. It is safe to
//!    call from any number of threads without synchronization.
//!
//! ## Example
//!
//! ```
//! use footprint_core::{ActivityInput, EmissionsEstimator};
//!
//! let input = ActivityInput::from_json_str(
//!     r#"{"transportEntries": [{"mode": "car", "vehicleClass": "medium", "distance": "50", "distanceUnit": "km"}]}"#,
//! ).unwrap();
//! let result = EmissionsEstimator.compute(&input);
//! assert_eq!(result.total_kg_co2e, 10.0);
//! assert_eq!(result.breakdown.transport.percentage_of_total, 100);
//! ```

pub mod activity;
pub mod category;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod insights;
pub mod quantity;
pub mod result;

// Re-export primary types at crate root for ergonomic imports.
pub use activity::{
    ActivityInput, ElectricityEntry, EntryTally, FoodEntry, TransportEntry, TransportMode,
    WasteEntry,
};
pub use category::Category;
pub use error::{FootprintError, ValidationError};
pub use estimator::{EmissionSource, EmissionsEstimator};
pub use factors::{factor_table, DistanceUnit, EateryType, FactorEntry, TravelClass, VehicleClass};
pub use insights::{average_total, ranked_categories, reduction_tips, RankedCategory};
pub use quantity::{parse_positive_number, Quantity};
pub use result::{Breakdown, CategoryEmissions, EmissionsResult, RawEmissions};
