use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: write the default configuration file.
/// With `--test` nothing is written.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Init = cmd {
        println!("⚙️  Initializing rImsakiye…");
        Config::init_at(&ctx.config_path, ctx.test)?;
        success(format!("Config file: {}", ctx.config_path.display()));
    }
    Ok(())
}
