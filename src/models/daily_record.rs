use super::date_label::DayKey;
use crate::errors::AppResult;
use crate::utils::time::parse_clock;
use serde::{Deserialize, Serialize};

/// Value used in place of a clock time for days without a schedule.
pub const PLACEHOLDER: &str = "-";

/// One calendar day of the imsakiye: the six boundary times plus the
/// optional holiday marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub day: u32,
    pub date: String,
    pub imsak: String,
    pub gunes: String,
    pub ogle: String,
    pub ikindi: String,
    pub aksam: String,
    pub yatsi: String,
    #[serde(default)]
    pub is_holiday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

impl DailyRecord {
    /// Holiday-only record: no schedule, all six times are the placeholder.
    pub fn holiday_only(day: u32, date: &str, name: &str) -> Self {
        Self {
            day,
            date: date.to_string(),
            imsak: PLACEHOLDER.into(),
            gunes: PLACEHOLDER.into(),
            ogle: PLACEHOLDER.into(),
            ikindi: PLACEHOLDER.into(),
            aksam: PLACEHOLDER.into(),
            yatsi: PLACEHOLDER.into(),
            is_holiday: true,
            holiday_name: Some(name.to_string()),
        }
    }

    pub fn day_key(&self) -> AppResult<DayKey> {
        DayKey::parse(&self.date)
    }

    /// True when both imsak and akşam are real clock times.
    pub fn has_schedule(&self) -> bool {
        parse_clock(&self.imsak).is_ok() && parse_clock(&self.aksam).is_ok()
    }

    /// Date label without the `| ...` decoration.
    pub fn display_date(&self) -> &str {
        self.date.split('|').next().unwrap_or("").trim()
    }

    /// Day and month only, e.g. `"20 Mart"`.
    pub fn short_date(&self) -> String {
        self.date
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The six times with their display labels, in the order of the day.
    pub fn times(&self) -> [(&'static str, &str); 6] {
        [
            ("İmsak", &self.imsak),
            ("Güneş", &self.gunes),
            ("Öğle", &self.ogle),
            ("İkindi", &self.ikindi),
            ("Akşam", &self.aksam),
            ("Yatsı", &self.yatsi),
        ]
    }

    pub(crate) fn time_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("imsak", &self.imsak),
            ("gunes", &self.gunes),
            ("ogle", &self.ogle),
            ("ikindi", &self.ikindi),
            ("aksam", &self.aksam),
            ("yatsi", &self.yatsi),
        ]
    }
}
