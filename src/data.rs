//! Static 2026 datasets shipped inside the binary.
//!
//! Every dataset is validated when loaded: a date label with an unknown
//! month name, or a time field that is neither `HH:MM` nor the `-`
//! placeholder, rejects the whole dataset.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::daily_record::{DailyRecord, PLACEHOLDER};
use crate::models::date_label::DayKey;
use crate::models::holiday::HolidayOverride;
use crate::utils::time::parse_clock;

const ISTANBUL: &str = include_str!("../data/istanbul.json");
const ANKARA: &str = include_str!("../data/ankara.json");
const IZMIR: &str = include_str!("../data/izmir.json");
const HOLIDAYS: &str = include_str!("../data/holidays.json");

fn raw_city(city: City) -> &'static str {
    match city {
        City::Istanbul => ISTANBUL,
        City::Ankara => ANKARA,
        City::Izmir => IZMIR,
    }
}

fn rejected(name: &str, reason: String) -> AppError {
    AppError::Dataset {
        name: name.to_string(),
        reason,
    }
}

/// Base schedule for a city.
pub fn load_city(city: City) -> AppResult<Vec<DailyRecord>> {
    parse_schedule(city.id(), raw_city(city))
}

pub fn load_holidays() -> AppResult<Vec<HolidayOverride>> {
    parse_holidays("holidays", HOLIDAYS)
}

/// Deserialize and validate a schedule. Blank input is an empty schedule.
pub fn parse_schedule(name: &str, json: &str) -> AppResult<Vec<DailyRecord>> {
    if json.trim().is_empty() {
        log::warn!("dataset '{}' is empty", name);
        return Ok(Vec::new());
    }

    let records: Vec<DailyRecord> =
        serde_json::from_str(json).map_err(|e| rejected(name, e.to_string()))?;

    for r in &records {
        validate_record(name, r)?;
    }

    log::debug!("dataset '{}': {} records", name, records.len());
    Ok(records)
}

pub fn parse_holidays(name: &str, json: &str) -> AppResult<Vec<HolidayOverride>> {
    let holidays: Vec<HolidayOverride> =
        serde_json::from_str(json).map_err(|e| rejected(name, e.to_string()))?;

    for h in &holidays {
        h.day_key()
            .map_err(|e| rejected(name, format!("day '{}': {}", h.date, e)))?;
    }

    log::debug!("dataset '{}': {} holidays", name, holidays.len());
    Ok(holidays)
}

fn validate_record(name: &str, r: &DailyRecord) -> AppResult<()> {
    DayKey::parse(&r.date).map_err(|e| rejected(name, format!("day {}: {}", r.day, e)))?;

    for (field, value) in r.time_fields() {
        if value == PLACEHOLDER {
            continue;
        }
        parse_clock(value).map_err(|e| {
            rejected(
                name,
                format!("day {} ({}), field {}: {}", r.day, r.date, field, e),
            )
        })?;
    }

    Ok(())
}
