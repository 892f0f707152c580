use super::date_label::DayKey;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A religious day overlaid on (or appended to) the imsakiye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayOverride {
    pub date: String,
    #[serde(default = "default_true")]
    pub is_holiday: bool,
    pub holiday_name: String,
}

impl HolidayOverride {
    pub fn new(date: &str, name: &str) -> Self {
        Self {
            date: date.to_string(),
            is_holiday: true,
            holiday_name: name.to_string(),
        }
    }

    pub fn day_key(&self) -> AppResult<DayKey> {
        DayKey::parse(&self.date)
    }
}
