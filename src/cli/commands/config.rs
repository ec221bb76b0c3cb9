use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("failed to render config: {}", e)))?;
            println!("{}", yaml);
        }
    }

    Ok(())
}
