//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, explicit: Option<&Path>) -> Result<()> {
    match args.action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Path => {
            let path = match explicit {
                Some(path) => path.to_path_buf(),
                None => Config::default_path()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}
