//! Path utilities: expand ~ in user-supplied database paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Same as [`expand_tilde`], returned as an owned string for the store.
pub fn resolve_db_path(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}
