use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Open `path` in `editor`, then `$EDITOR`/`$VISUAL`, then nano (notepad on Windows).
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let fallback = if cfg!(target_os = "windows") {
            "notepad"
        } else {
            "nano"
        };

        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| fallback.into());

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                ed, status
            )));
        }

        Ok(())
    }
}
