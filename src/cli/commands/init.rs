use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
/// With `--test` nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    let defaults = Config::default();
    println!("🌐 Backend     : {}", defaults.api_base_url);
    println!("🔑 Session file: {}", defaults.session_path().display());
    Ok(())
}
