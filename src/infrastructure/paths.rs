//! Sandbox path helpers.

use std::path::PathBuf;

/// Plugin-private data directory, where the trace file is written.
///
/// # Examples
///
/// ```
/// use roster::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/data"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Maps `~` to the sandbox's `/host` mount so user-facing paths such as
/// `light_theme_file "~/themes/paper.toml"` resolve inside the plugin.
///
/// # Examples
///
/// ```
/// use roster::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/paper.toml"), "/host/themes/paper.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/roster.toml"), "/etc/roster.toml");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
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
