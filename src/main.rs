//! rImsakiye main entrypoint.

use rimsakiye::run;
use rimsakiye::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RIMSAKIYE_LOG", "warn"))
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
