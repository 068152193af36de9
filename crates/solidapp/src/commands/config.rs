use crate::commands::{CmdMessage, CmdResult};
use crate::config::{global_config_path, SolidConfig};

pub fn run(config: &SolidConfig) -> CmdResult {
    let mut result = CmdResult {
        config: Some(config.clone()),
        ..Default::default()
    };
    match global_config_path() {
        Some(path) => result.add_message(CmdMessage::info(format!(
            "Global config: {}",
            path.display()
        ))),
        None => result.add_message(CmdMessage::warning("No global config directory available")),
    }
    result
}
