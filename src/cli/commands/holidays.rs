use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::merge::holidays;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::pad_right;

/// Handle the `holidays` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Holidays = cmd {
        let calendar = Core::calendar_for(ctx.city)?;
        let days = holidays(&calendar);

        header("Dini Günler", None, ctx.colours);
        println!();

        if days.is_empty() {
            info("No religious days in the calendar.");
            return Ok(());
        }

        let width = days
            .iter()
            .filter_map(|d| d.holiday_name.as_deref())
            .map(unicode_width::UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);

        for day in days {
            let name = day.holiday_name.as_deref().unwrap_or("");
            println!("{}  {}", pad_right(name, width), day.short_date());
        }
    }
    Ok(())
}
