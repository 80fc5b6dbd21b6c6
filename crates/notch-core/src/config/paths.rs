//! Standard locations for notch config files

use std::path::PathBuf;

/// Per-app config directory: `~/.config/{app}` on Linux
///
/// Falls back to the home directory, then the working directory.
pub fn default_config_dir(app: &str) -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
}

/// `{config dir}/{app}/{filename}`
pub fn default_config_path(app: &str, filename: &str) -> PathBuf {
    default_config_dir(app).join(filename)
}
