use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::PublistConfig;
use crate::error::{PublistError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads answer from the effective `config` the caller resolved; sets are
/// persisted to `config_dir` (the per-user config directory), never to a
/// project-local file.
pub fn run(
    config: &PublistConfig,
    config_dir: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let Some(dir) = config_dir else {
                return Err(PublistError::Api(
                    "No config directory available on this system".to_string(),
                ));
            };
            let mut updated = PublistConfig::load_dir(dir)?;
            if let Err(e) = updated.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            updated.save(dir)?;
            let display_val = updated.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(updated);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
