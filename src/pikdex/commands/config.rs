use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, PikdexConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes `config.json` in `dir`.
///
/// Unknown keys and rejected values are errors, so nothing is written for them.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PikdexConfig::load(dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => CmdMessage::info(config.get(key.parse::<ConfigKey>()?)),
        ConfigAction::Set(key, value) => {
            let key = key.parse::<ConfigKey>()?;
            config.set(key, &value)?;
            config.save(dir)?;
            log::info!("config {} changed in {}", key, dir.display());
            CmdMessage::success(format!("{} set to {}", key, config.get(key)))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    result.add_message(message);
    Ok(result)
}
