use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
        }

        if *print_config {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !config_path.exists() {
                Config::init_file(config_path, false)?;
            }
            ConfigLogic::edit(config_path, editor)?;
        }
    }

    Ok(())
}
