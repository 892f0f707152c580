pub mod city;
pub mod daily_record;
pub mod date_label;
pub mod event;
pub mod event_kind;
pub mod holiday;
