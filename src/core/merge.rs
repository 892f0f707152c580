//! Overlay holiday overrides on a city's base schedule.

use crate::models::daily_record::DailyRecord;
use crate::models::date_label::DayKey;
use crate::models::holiday::HolidayOverride;
use std::collections::HashMap;

/// Merge `holidays` into a copy of `base`.
///
/// A holiday whose date matches a base day is overlaid on it (date label,
/// holiday flag and name; the schedule is kept). Any other holiday is
/// appended as a holiday-only day numbered `len + 1`. Base order is kept and
/// appended days follow in override order.
pub fn merge(base: &[DailyRecord], holidays: &[HolidayOverride]) -> Vec<DailyRecord> {
    let mut merged = base.to_vec();

    // First record wins on duplicate dates
    let mut index: HashMap<DayKey, usize> = HashMap::new();
    for (i, r) in merged.iter().enumerate() {
        if let Ok(key) = r.day_key() {
            index.entry(key).or_insert(i);
        }
    }

    for holiday in holidays {
        let key = match holiday.day_key() {
            Ok(k) => Some(k),
            Err(e) => {
                log::warn!("holiday '{}' never matches: {}", holiday.holiday_name, e);
                None
            }
        };

        match key.and_then(|k| index.get(&k).copied()) {
            Some(i) => {
                let day = &mut merged[i];
                day.date = holiday.date.clone();
                day.is_holiday = holiday.is_holiday;
                day.holiday_name = Some(holiday.holiday_name.clone());
                log::trace!("overlaid '{}' on day {}", holiday.holiday_name, day.day);
            }
            None => {
                let mut day = DailyRecord::holiday_only(
                    merged.len() as u32 + 1,
                    &holiday.date,
                    &holiday.holiday_name,
                );
                day.is_holiday = holiday.is_holiday;
                if let Some(k) = key {
                    index.insert(k, merged.len());
                }
                log::trace!("appended '{}' as day {}", holiday.holiday_name, day.day);
                merged.push(day);
            }
        }
    }

    log::debug!(
        "merged calendar: {} base + {} holidays -> {} days",
        base.len(),
        holidays.len(),
        merged.len()
    );
    merged
}

/// Calendar sorted by date. The sort is stable; days whose label does not
/// parse keep their relative order at the end.
pub fn chronological(calendar: &[DailyRecord]) -> Vec<DailyRecord> {
    let mut sorted = calendar.to_vec();
    sorted.sort_by_key(|r| match r.day_key() {
        Ok(k) => (0, Some(k)),
        Err(_) => (1, None),
    });
    sorted
}

/// Every day carrying a holiday name, in calendar order.
pub fn holidays(calendar: &[DailyRecord]) -> Vec<&DailyRecord> {
    calendar.iter().filter(|r| r.is_holiday).collect()
}
