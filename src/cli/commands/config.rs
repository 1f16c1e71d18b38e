//! Show and change the global configuration

use std::path::PathBuf;

use segduty::config::GlobalConfig;
use segduty::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(
    mut config: GlobalConfig,
    action: &ConfigAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("# {}", GlobalConfig::config_path().display());
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "display.color" => config.display.color = parse_bool(key, value)?,
                "catalog.strict_symmetry" => {
                    config.catalog.strict_symmetry = parse_bool(key, value)?;
                },
                "catalog.path" => {
                    config.catalog.path = (!value.is_empty()).then(|| PathBuf::from(value));
                },
                other => anyhow::bail!(
                    "Unknown config key: {other}. Use one of: display.color, catalog.path, \
                     catalog.strict_symmetry"
                ),
            }
            config.save()?;
            OperationResult::ok(format!("Set {key} = {value}")).render(mode);
        },
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => anyhow::bail!("{key} expects true or false, got '{value}'"),
    }
}
