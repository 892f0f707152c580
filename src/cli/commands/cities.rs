use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::city::City;
use crate::utils::colors::highlight;

/// Handle the `cities` command
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Cities = cmd {
        for city in City::ALL {
            let line = format!("{:<9} {}", city.id(), city.display_name());
            if city == ctx.city {
                println!("▶ {}", highlight(&line, ctx.colours));
            } else {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}
