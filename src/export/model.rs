// src/export/model.rs

use crate::models::daily_record::DailyRecord;
use serde::Serialize;

/// Flat row of the merged calendar for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub day: u32,
    pub date: String,
    pub label: String,
    pub imsak: String,
    pub gunes: String,
    pub ogle: String,
    pub ikindi: String,
    pub aksam: String,
    pub yatsi: String,
    pub is_holiday: bool,
    pub holiday_name: String,
}

impl From<&DailyRecord> for DayExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            day: r.day,
            // ISO date when the label parses, empty otherwise
            date: r.day_key().map(|k| k.to_string()).unwrap_or_default(),
            label: r.display_date().to_string(),
            imsak: r.imsak.clone(),
            gunes: r.gunes.clone(),
            ogle: r.ogle.clone(),
            ikindi: r.ikindi.clone(),
            aksam: r.aksam.clone(),
            yatsi: r.yatsi.clone(),
            is_holiday: r.is_holiday,
            holiday_name: r.holiday_name.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn calendar_to_rows(calendar: &[DailyRecord]) -> Vec<DayExport> {
    calendar.iter().map(DayExport::from).collect()
}
