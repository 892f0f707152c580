use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::core::resolve::current_day_index;
use crate::errors::AppResult;
use crate::models::daily_record::DailyRecord;
use crate::ui::messages::header;
use crate::utils::colors::{highlight, holiday, muted};
use crate::utils::table::{Column, Table};

/// Badge of a row: Ramadan days are numbered, the rest are religious days.
pub fn row_badge(day: &DailyRecord) -> String {
    if day.has_schedule() {
        format!("{}. GÜN", day.day)
    } else {
        "DİNİ GÜN".to_string()
    }
}

pub fn build_table(calendar: &[DailyRecord], current: Option<usize>, colours: bool) -> Table {
    let mut table = Table::new(vec![
        Column::new("", 1),
        Column::new("GÜN", 9),
        Column::new("TARİH", 24),
        Column::new("İMSAK", 5),
        Column::new("AKŞAM", 5),
        Column::new("", 0),
    ]);

    for (idx, day) in calendar.iter().enumerate() {
        let is_current = Some(idx) == current;
        let marker = if is_current { "▶" } else { "" };
        let (imsak, aksam) = if day.has_schedule() {
            (day.imsak.clone(), day.aksam.clone())
        } else {
            (muted(&day.imsak, colours), muted(&day.aksam, colours))
        };
        let name = day
            .holiday_name
            .as_deref()
            .filter(|_| day.is_holiday)
            .map(|n| holiday(n, colours))
            .unwrap_or_default();

        let mut row = vec![
            marker.to_string(),
            row_badge(day),
            day.display_date().to_string(),
            imsak,
            aksam,
            name,
        ];
        if is_current {
            for cell in row.iter_mut().take(5) {
                *cell = highlight(cell, colours);
            }
        }
        table.add_row(row);
    }

    table
}

/// Handle the `list` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List = cmd {
        let calendar = Core::calendar_for(ctx.city)?;
        let current = current_day_index(&calendar, ctx.now().date_naive());

        header(
            &format!("RAMAZAN 2026 · {}", ctx.city.display_name()),
            Some("İmsakiye Çizelgesi"),
            ctx.colours,
        );
        println!();
        print!("{}", build_table(&calendar, current, ctx.colours).render());
    }
    Ok(())
}
