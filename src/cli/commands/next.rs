use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::cli::render::{countdown_block, countdown_json};
use crate::core::countdown::Countdown;
use crate::core::logic::Core;
use crate::errors::AppResult;

/// Handle the `next` command (also the default command)
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Next { json } = cmd {
        let calendar = Core::calendar_for(ctx.city)?;
        let now = ctx.now();
        let cd = Countdown::at(&calendar, now);

        if *json {
            println!(
                "{}",
                serde_json::to_string_pretty(&countdown_json(ctx.city, &cd))?
            );
        } else {
            print!("{}", countdown_block(ctx, &calendar, &cd, &now));
        }
    }
    Ok(())
}
