//! Platform-specific directory utilities.

use std::path::PathBuf;

const CONTENT_DIR_ENV: &str = "HEARTHWILD_CONTENT_DIR";

/// Get the platform-specific data directory for saved states
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/hearthwild`
/// - Linux: `~/.local/share/hearthwild` (or `$XDG_DATA_HOME/hearthwild`)
/// - Windows: `%APPDATA%\hearthwild`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hearthwild")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Directory holding `config.toml`, the catalogs and `maps/`.
///
/// Resolution order: the `HEARTHWILD_CONTENT_DIR` environment variable,
/// then the content crate's `data/` directory in this workspace.
pub fn content_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONTENT_DIR_ENV) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}
