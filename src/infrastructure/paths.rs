//! Path helpers for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the directory holding Quoteboard's trace files.
///
/// Resolves to `/host/.local/share/zellij/quoteboard`, which is
/// `~/.local/share/zellij/quoteboard` when Zellij was started from the home
/// directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("quoteboard")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use quoteboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
