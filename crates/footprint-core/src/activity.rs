//! # Activity Input
//!
//! The [`ActivityInput`] aggregate and its four entry types. Entries are
//! value objects with no identity beyond their position; they hold raw
//! [`Quantity`] text exactly as a person typed it.
//!
//! ## Wire Format
//!
//! Field names are camelCase (`transportEntries`, `consumptionKwh`, ...).
//! The names used by the original web form (`transportData`,
//! `transportType`, `vehicleType`, `consumption`, `garbageBags`, ...) are
//! accepted as aliases. A missing or `null` category array decodes as an
//! empty one, never as an error.
//!
//! Malformed entries never fail the document. An unknown or missing `mode`,
//! or an unknown `eateryType`, decodes as an unrecognized selector that
//! contributes nothing. An unknown class or unit falls back to its default.
//! An entry that is not an object at all decodes as a blank, excluded entry.
//!
//! A transport leg is flat on the wire (`mode`, `vehicleClass`,
//! `travelClass`, `distance`, `distanceUnit`) but decodes into the
//! [`TransportMode`] sum type, which keeps the car and plane classes inside
//! the variants that use them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;
use crate::error::{FootprintError, ValidationError};
use crate::estimator::EmissionSource;
use crate::factors::{DistanceUnit, EateryType, TravelClass, VehicleClass};
use crate::quantity::Quantity;

/// Decode a category array. `null` is an empty array, and an element that
/// fails to decode becomes a default (blank, excluded) entry.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

/// Decode a selector, mapping `null` and unknown names to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `null` is the default eatery; an unknown name is [`EateryType::Unrecognized`].
fn lenient_eatery<'de, D>(deserializer: D) -> Result<EateryType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(EateryType::default());
    }
    Ok(serde_json::from_value(value).unwrap_or(EateryType::Unrecognized))
}

/// One user's lifestyle inputs for a single estimation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    /// Travel legs.
    #[serde(default, alias = "transportData", deserialize_with = "lenient_entries")]
    pub transport_entries: Vec<TransportEntry>,
    /// Electricity meter readings.
    #[serde(default, alias = "electricityData", deserialize_with = "lenient_entries")]
    pub electricity_entries: Vec<ElectricityEntry>,
    /// Garbage output.
    #[serde(default, alias = "wasteData", deserialize_with = "lenient_entries")]
    pub waste_entries: Vec<WasteEntry>,
    /// Food spending.
    #[serde(default, alias = "foodData", deserialize_with = "lenient_entries")]
    pub food_entries: Vec<FoodEntry>,
}

/// Usable versus excluded entry counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryTally {
    /// Entries whose quantity passed the validity rule.
    pub usable: usize,
    /// Entries ignored because their quantity was blank, non-numeric, or not positive.
    pub excluded: usize,
}

impl EntryTally {
    fn of<E: EmissionSource>(entries: &[E]) -> Self {
        let usable = entries.iter().filter(|e| e.is_usable()).count();
        Self {
            usable,
            excluded: entries.len() - usable,
        }
    }
}

impl ActivityInput {
    /// Decode an input document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, FootprintError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a whole JSON document from `reader` and decode it.
    pub fn from_json_reader(mut reader: impl std::io::Read) -> Result<Self, FootprintError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json_str(&raw)
    }

    /// Decode an input document from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FootprintError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Whether the input has no entries at all, usable or not.
    pub fn is_empty(&self) -> bool {
        self.transport_entries.is_empty()
            && self.electricity_entries.is_empty()
            && self.waste_entries.is_empty()
            && self.food_entries.is_empty()
    }

    /// Usable and excluded entry counts for one category.
    pub fn tally(&self, category: Category) -> EntryTally {
        match category {
            Category::Transport => EntryTally::of(&self.transport_entries),
            Category::Electricity => EntryTally::of(&self.electricity_entries),
            Category::Waste => EntryTally::of(&self.waste_entries),
            Category::Food => EntryTally::of(&self.food_entries),
        }
    }

    /// Whether at least one entry in any category would contribute emissions.
    pub fn has_usable_entries(&self) -> bool {
        self.transport_entries.iter().any(EmissionSource::is_usable)
            || self.electricity_entries.iter().any(EmissionSource::is_usable)
            || self.waste_entries.iter().any(EmissionSource::is_usable)
            || self.food_entries.iter().any(EmissionSource::is_usable)
    }

    /// Caller-level pre-check: fail when nothing usable was provided.
    ///
    /// The estimator accepts empty input and returns an all-zero result;
    /// callers that want to refuse such requests run this first.
    pub fn require_usable(&self) -> Result<(), ValidationError> {
        if self.has_usable_entries() {
            Ok(())
        } else {
            Err(ValidationError::NoUsableInput)
        }
    }
}

/// Means of transport, carrying the class selector where one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// Private car of the given size.
    Car(VehicleClass),
    /// Public bus.
    Bus,
    /// Passenger rail.
    Train,
    /// Commercial flight in the given cabin.
    Plane(TravelClass),
    /// Missing or unknown mode. Has no factor; legs carrying it are excluded.
    Unrecognized,
}

impl TransportMode {
    /// kg CO2e per km for this mode.
    pub fn kg_co2e_per_km(&self) -> f64 {
        match self {
            Self::Car(class) => class.kg_co2e_per_km(),
            Self::Bus => 0.10,
            Self::Train => 0.05,
            Self::Plane(class) => class.kg_co2e_per_km(),
            Self::Unrecognized => 0.0,
        }
    }

    /// Short label such as `car/medium`, `bus`, or `plane/first`.
    pub fn label(&self) -> String {
        match self {
            Self::Car(class) => format!("car/{}", class.as_str()),
            Self::Bus => "bus".to_string(),
            Self::Train => "train".to_string(),
            Self::Plane(class) => format!("plane/{}", class.as_str()),
            Self::Unrecognized => "unrecognized".to_string(),
        }
    }
}

/// A single travel leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransportEntryWire", into = "TransportEntryWire")]
pub struct TransportEntry {
    /// Mode and, for cars and planes, class.
    pub mode: TransportMode,
    /// Distance as typed.
    pub distance: Quantity,
    /// Unit of `distance`.
    pub distance_unit: DistanceUnit,
}

impl Default for TransportEntry {
    fn default() -> Self {
        Self::new(TransportMode::Unrecognized, "", DistanceUnit::Km)
    }
}

impl TransportEntry {
    /// Build a leg from its parts.
    pub fn new(mode: TransportMode, distance: impl Into<Quantity>, unit: DistanceUnit) -> Self {
        Self {
            mode,
            distance: distance.into(),
            distance_unit: unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ModeName {
    Car,
    Bus,
    Train,
    Plane,
}

/// Flat wire shape of a [`TransportEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransportEntryWire {
    #[serde(
        default,
        alias = "transportType",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    mode: Option<ModeName>,
    #[serde(
        default,
        alias = "vehicleType",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    vehicle_class: Option<VehicleClass>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    travel_class: Option<TravelClass>,
    #[serde(default)]
    distance: Quantity,
    #[serde(default, deserialize_with = "lenient")]
    distance_unit: Option<DistanceUnit>,
}

impl From<TransportEntryWire> for TransportEntry {
    fn from(wire: TransportEntryWire) -> Self {
        let mode = match wire.mode {
            Some(ModeName::Car) => TransportMode::Car(wire.vehicle_class.unwrap_or_default()),
            Some(ModeName::Bus) => TransportMode::Bus,
            Some(ModeName::Train) => TransportMode::Train,
            Some(ModeName::Plane) => TransportMode::Plane(wire.travel_class.unwrap_or_default()),
            None => TransportMode::Unrecognized,
        };
        Self {
            mode,
            distance: wire.distance,
            distance_unit: wire.distance_unit.unwrap_or_default(),
        }
    }
}

impl From<TransportEntry> for TransportEntryWire {
    fn from(entry: TransportEntry) -> Self {
        let (mode, vehicle_class, travel_class) = match entry.mode {
            TransportMode::Car(class) => (Some(ModeName::Car), Some(class), None),
            TransportMode::Bus => (Some(ModeName::Bus), None, None),
            TransportMode::Train => (Some(ModeName::Train), None, None),
            TransportMode::Plane(class) => (Some(ModeName::Plane), None, Some(class)),
            TransportMode::Unrecognized => (None, None, None),
        };
        Self {
            mode,
            vehicle_class,
            travel_class,
            distance: entry.distance,
            distance_unit: Some(entry.distance_unit),
        }
    }
}

/// A household electricity reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityEntry {
    /// Consumption in kWh as typed.
    #[serde(default, alias = "consumption")]
    pub consumption_kwh: Quantity,
}

impl ElectricityEntry {
    /// Build a reading.
    pub fn new(consumption_kwh: impl Into<Quantity>) -> Self {
        Self {
            consumption_kwh: consumption_kwh.into(),
        }
    }
}

/// Weekly garbage output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteEntry {
    /// Standard bags per week as typed.
    #[serde(default, alias = "garbageBags")]
    pub bags_per_week: Quantity,
}

impl WasteEntry {
    /// Build a waste entry.
    pub fn new(bags_per_week: impl Into<Quantity>) -> Self {
        Self {
            bags_per_week: bags_per_week.into(),
        }
    }
}

/// Money spent on food at one kind of eatery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Amount spent as typed.
    #[serde(default)]
    pub money_spent: Quantity,
    /// Where it was spent.
    #[serde(default, deserialize_with = "lenient_eatery")]
    pub eatery_type: EateryType,
}

impl FoodEntry {
    /// Build a food entry.
    pub fn new(money_spent: impl Into<Quantity>, eatery_type: EateryType) -> Self {
        Self {
            money_spent: money_spent.into(),
            eatery_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_canonical_field_names() {
        let input: ActivityInput = serde_json::from_value(json!({
            "transportEntries": [
                {"mode": "car", "vehicleClass": "small", "distance": "12", "distanceUnit": "miles"},
                {"mode": "plane", "travelClass": "first", "distance": "900", "distanceUnit": "km"},
                {"mode": "train", "distance": "30", "distanceUnit": "km"}
            ],
            "electricityEntries": [{"consumptionKwh": "100"}],
            "wasteEntries": [{"bagsPerWeek": "2"}],
            "foodEntries": [{"moneySpent": "50", "eateryType": "fastFood"}]
        }))
        .unwrap();

        assert_eq!(input.transport_entries.len(), 3);
        assert_eq!(input.transport_entries[0].mode, TransportMode::Car(VehicleClass::Small));
        assert_eq!(input.transport_entries[0].distance_unit, DistanceUnit::Miles);
        assert_eq!(input.transport_entries[1].mode, TransportMode::Plane(TravelClass::First));
        assert_eq!(input.transport_entries[2].mode, TransportMode::Train);
        assert_eq!(input.electricity_entries[0].consumption_kwh.as_str(), "100");
        assert_eq!(input.waste_entries[0].bags_per_week.as_str(), "2");
        assert_eq!(input.food_entries[0].eatery_type, EateryType::FastFood);
    }

    #[test]
    fn decodes_legacy_form_field_names() {
        let input: ActivityInput = serde_json::from_value(json!({
            "transportData": [
                {"transportType": "car", "vehicleType": "large", "distance": "10", "distanceUnit": "km"}
            ],
            "electricityData": [{"consumption": "40"}],
            "wasteData": [{"garbageBags": "3"}],
            "foodData": [{"moneySpent": "20", "eateryType": "restaurant"}]
        }))
        .unwrap();

        assert_eq!(input.transport_entries[0].mode, TransportMode::Car(VehicleClass::Large));
        assert_eq!(input.electricity_entries[0].consumption_kwh.as_str(), "40");
        assert_eq!(input.waste_entries[0].bags_per_week.as_str(), "3");
        assert_eq!(input.food_entries[0].eatery_type, EateryType::Restaurant);
    }

    #[test]
    fn missing_and_null_arrays_are_empty() {
        let input = ActivityInput::from_json_str("{}").unwrap();
        assert!(input.is_empty());

        let input = ActivityInput::from_json_str(r#"{"foodEntries": null}"#).unwrap();
        assert!(input.food_entries.is_empty());
    }

    #[test]
    fn omitted_selectors_take_form_defaults() {
        let input: ActivityInput = serde_json::from_value(json!({
            "transportEntries": [
                {"mode": "car", "distance": "5"},
                {"mode": "plane", "travelClass": null, "distance": "5", "distanceUnit": null}
            ],
            "foodEntries": [{"moneySpent": "5"}]
        }))
        .unwrap();

        assert_eq!(input.transport_entries[0].mode, TransportMode::Car(VehicleClass::Medium));
        assert_eq!(input.transport_entries[0].distance_unit, DistanceUnit::Km);
        assert_eq!(input.transport_entries[1].mode, TransportMode::Plane(TravelClass::Economy));
        assert_eq!(input.food_entries[0].eatery_type, EateryType::HomeCooked);
    }

    #[test]
    fn class_for_other_mode_is_ignored() {
        let entry: TransportEntry = serde_json::from_value(json!({
            "mode": "bus", "vehicleClass": "large", "travelClass": "first", "distance": "8"
        }))
        .unwrap();
        assert_eq!(entry.mode, TransportMode::Bus);
    }

    #[test]
    fn unknown_or_missing_mode_is_unrecognized() {
        let input = ActivityInput::from_json_str(
            r#"{"transportEntries": [
                {"mode": "rocket", "distance": "5"},
                {"distance": "7"},
                {"mode": 3, "distance": "9"},
                {"mode": "car", "vehicleClass": "medium", "distance": "50"}
            ]}"#,
        )
        .unwrap();
        let modes: Vec<TransportMode> = input.transport_entries.iter().map(|e| e.mode).collect();
        assert_eq!(
            modes,
            [
                TransportMode::Unrecognized,
                TransportMode::Unrecognized,
                TransportMode::Unrecognized,
                TransportMode::Car(VehicleClass::Medium),
            ]
        );
        assert_eq!(
            input.tally(Category::Transport),
            EntryTally { usable: 1, excluded: 3 }
        );
    }

    #[test]
    fn unknown_class_and_unit_fall_back_to_defaults() {
        let entry: TransportEntry = serde_json::from_value(json!({
            "mode": "car", "vehicleClass": "hovercraft", "distance": "5", "distanceUnit": "leagues"
        }))
        .unwrap();
        assert_eq!(entry.mode, TransportMode::Car(VehicleClass::Medium));
        assert_eq!(entry.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn unknown_eatery_is_unrecognized() {
        let input = ActivityInput::from_json_str(
            r#"{"foodEntries": [{"moneySpent": "10", "eateryType": "picnic"}, {"moneySpent": "10"}]}"#,
        )
        .unwrap();
        assert_eq!(input.food_entries[0].eatery_type, EateryType::Unrecognized);
        assert_eq!(input.food_entries[1].eatery_type, EateryType::HomeCooked);
        assert_eq!(input.tally(Category::Food), EntryTally { usable: 1, excluded: 1 });
    }

    #[test]
    fn malformed_quantities_and_entries_are_excluded() {
        let input = ActivityInput::from_json_str(
            r#"{
                "electricityEntries": [{"consumptionKwh": true}, {"consumptionKwh": [1]}, "100", 7],
                "wasteEntries": [{"bagsPerWeek": {"n": 2}}, {"bagsPerWeek": "2"}]
            }"#,
        )
        .unwrap();
        assert_eq!(input.electricity_entries.len(), 4);
        assert!(!input.electricity_entries.iter().any(EmissionSource::is_usable));
        assert_eq!(input.tally(Category::Waste), EntryTally { usable: 1, excluded: 1 });
    }

    #[test]
    fn non_array_category_is_a_decode_error() {
        let err = ActivityInput::from_json_str(r#"{"wasteEntries": 7}"#).unwrap_err();
        assert!(matches!(err, FootprintError::Json(_)));
    }

    #[test]
    fn unrecognized_leg_serializes_without_mode() {
        let json = serde_json::to_value(TransportEntry::default()).unwrap();
        assert_eq!(json, json!({"distance": "", "distanceUnit": "km"}));
        let back: TransportEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, TransportEntry::default());
    }

    #[test]
    fn transport_entry_serializes_flat() {
        let entry = TransportEntry::new(
            TransportMode::Plane(TravelClass::Business),
            "1000",
            DistanceUnit::Miles,
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            json!({"mode": "plane", "travelClass": "business", "distance": "1000", "distanceUnit": "miles"})
        );
    }

    #[test]
    fn decodes_yaml() {
        let input = ActivityInput::from_yaml_str(
            "transportEntries:\n  - mode: bus\n    distance: 20\nwasteEntries:\n  - bagsPerWeek: '1'\n",
        )
        .unwrap();
        assert_eq!(input.transport_entries[0].mode, TransportMode::Bus);
        assert_eq!(input.transport_entries[0].distance.as_str(), "20");
        assert_eq!(input.waste_entries.len(), 1);
    }

    #[test]
    fn decodes_from_reader() {
        let doc = br#"{"electricityEntries": [{"consumption": 12}]}"#;
        let input = ActivityInput::from_json_reader(&doc[..]).unwrap();
        assert_eq!(input.electricity_entries[0].consumption_kwh.as_str(), "12");
    }

    #[test]
    fn invalid_utf8_from_reader_is_io_error() {
        let err = ActivityInput::from_json_reader(&b"\xff\xfe"[..]).unwrap_err();
        assert!(matches!(err, FootprintError::Io(_)));
    }

    #[test]
    fn usable_entries_detection() {
        let mut input = ActivityInput {
            electricity_entries: vec![ElectricityEntry::new(""), ElectricityEntry::new("-1")],
            ..Default::default()
        };
        assert!(!input.has_usable_entries());
        assert_eq!(input.require_usable(), Err(ValidationError::NoUsableInput));

        input.waste_entries.push(WasteEntry::new("1"));
        assert!(input.has_usable_entries());
        assert_eq!(input.require_usable(), Ok(()));
    }

    #[test]
    fn tally_counts_usable_and_excluded() {
        let input = ActivityInput {
            transport_entries: vec![
                TransportEntry::new(TransportMode::Bus, "10", DistanceUnit::Km),
                TransportEntry::new(TransportMode::Train, "abc", DistanceUnit::Km),
                TransportEntry::new(TransportMode::Train, "", DistanceUnit::Km),
            ],
            ..Default::default()
        };
        assert_eq!(
            input.tally(Category::Transport),
            EntryTally { usable: 1, excluded: 2 }
        );
        assert_eq!(input.tally(Category::Food), EntryTally::default());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(TransportMode::Car(VehicleClass::Small).label(), "car/small");
        assert_eq!(TransportMode::Train.label(), "train");
        assert_eq!(TransportMode::Plane(TravelClass::Economy).label(), "plane/economy");
        assert_eq!(TransportMode::Unrecognized.label(), "unrecognized");
    }
}
