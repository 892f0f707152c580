use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let calendar = Core::calendar_for(ctx.city)?;
        ExportLogic::export(ctx.city, &calendar, *format, file, *force)?;
    }
    Ok(())
}
