use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(config_path: &Path, force: bool) -> AppResult<()> {
    println!("⚙️  Initializing pointadmin…");

    if crate::config::Config::init_file(config_path, force)? {
        success(format!("Config file written: {}", config_path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        ));
    }

    Ok(())
}
