use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(&ctx.cfg, &ctx.config_path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&ctx.config_path, editor)?;
        }
    }
    Ok(())
}
