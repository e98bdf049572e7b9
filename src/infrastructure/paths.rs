//! Sandbox path helpers.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox.
//! `/host` is the cwd of the last focused terminal, or the directory Zellij was
//! started from, which is usually the user's home.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace file.
///
/// Resolves to `~/.local/share/zellij/coinpane` on the host when Zellij was
/// started from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/coinpane")
}

/// Maps a `~`-prefixed host path to its location inside the sandbox.
///
/// ```
/// use coinpane::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/coinpane.toml"), "/etc/coinpane.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}
