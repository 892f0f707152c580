use crate::core::merge::{chronological, merge};
use crate::data;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::models::daily_record::DailyRecord;

pub struct Core;

impl Core {
    /// Merged, chronologically ordered calendar for `city`.
    ///
    /// Recomputed from the static datasets on every call; nothing is cached
    /// between city selections.
    pub fn calendar_for(city: City) -> AppResult<Vec<DailyRecord>> {
        let base = data::load_city(city)?;
        let holidays = data::load_holidays()?;
        Ok(chronological(&merge(&base, &holidays)))
    }
}
