// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::calendar_to_rows;
use crate::models::city::City;
use crate::models::daily_record::DailyRecord;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the merged calendar of `city` to `file` (absolute path, `~/`
    /// allowed). An existing file is only replaced with `force`.
    pub fn export(
        city: City,
        calendar: &[DailyRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if path.exists() {
            if !force {
                return Err(AppError::Export(format!(
                    "{} already exists; pass --force to replace it with the {} calendar",
                    path.display(),
                    city.display_name()
                )));
            }
            log::info!("replacing {} with the {} calendar", path.display(), city.id());
        }

        let rows = calendar_to_rows(calendar);
        if rows.is_empty() {
            warning("Calendar is empty. Nothing to export.");
            return Ok(());
        }

        log::debug!("exporting {} days as {}", rows.len(), format.as_str());
        match format {
            ExportFormat::Csv => export_csv(&rows, &path),
            ExportFormat::Json => export_json(&rows, &path),
        }
    }
}
