use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding the data root.
pub const DEX_ROOT_ENV: &str = "DEX_ROOT";

/// Returns the root directory holding preferences, history and config.
///
/// Resolution order:
/// 1. `DEX_ROOT` environment variable (if set and non-empty)
/// 2. The platform data directory for `dexplorer`
/// 3. `.dex` in the current working directory
pub fn dex_root() -> PathBuf {
    if let Ok(root) = std::env::var(DEX_ROOT_ENV)
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }

    ProjectDirs::from("", "", "dexplorer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".dex"))
}

/// Directory holding one JSON file per preference key.
pub fn prefs_dir() -> PathBuf {
    dex_root().join("prefs")
}

/// Path of the persisted navigation history.
pub fn history_path() -> PathBuf {
    dex_root().join("history.json")
}

/// Path of the YAML configuration file.
pub fn config_path() -> PathBuf {
    dex_root().join("config.yaml")
}
