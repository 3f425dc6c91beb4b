use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    info(format!("Configuration file: {}", path.display()));
                    println!("{}", content);
                }
                Err(_) => warning(format!(
                    "No configuration file at {} (defaults are in effect).",
                    path.display()
                )),
            }
        }

        if *check {
            let missing = Config::missing_fields();
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for m in missing {
                    warning(format!("Missing field: {}", m));
                }
                info("Missing fields fall back to their defaults.");
            }
        }
    }

    Ok(())
}
