//! Slot sorting strategies
//!
//! A closed set of named comparator strategies, one per sortable
//! observation field, instead of a generic keyed accessor. Sorts are
//! stable, so records that compare equal keep their feed order.

use crate::types::Slot;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable observation fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Timestamp,
    Wbgt,
    Temperature,
    ApparentTemp,
    Humidity,
    SolarRadiation,
    UvIndex,
    WindSpeed,
    RainChance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortField {
    fn compare(&self, a: &Slot, b: &Slot) -> Ordering {
        match self {
            SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
            SortField::Wbgt => a.wbgt_c.total_cmp(&b.wbgt_c),
            SortField::Temperature => a.temperature_c.total_cmp(&b.temperature_c),
            SortField::ApparentTemp => a.apparent_temp_c.total_cmp(&b.apparent_temp_c),
            SortField::Humidity => a.humidity_pct.total_cmp(&b.humidity_pct),
            SortField::SolarRadiation => a.solar_radiation_wm2.total_cmp(&b.solar_radiation_wm2),
            SortField::UvIndex => a.uv_index.total_cmp(&b.uv_index),
            SortField::WindSpeed => a.wind_speed_ms.total_cmp(&b.wind_speed_ms),
            SortField::RainChance => a.rain_chance_pct.total_cmp(&b.rain_chance_pct),
        }
    }
}

/// Sort slots in place by the named field, stable
pub fn sort_slots(slots: &mut [Slot], field: SortField, direction: SortDirection) {
    slots.sort_by(|a, b| {
        let ord = field.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
