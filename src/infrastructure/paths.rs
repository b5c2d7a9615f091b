//! Path utilities for data storage and user-supplied paths.
//!
//! This module resolves where log files live and expands tilde-prefixed
//! paths from configuration against the user's home directory.

use std::path::PathBuf;

/// Returns the data directory for bookgrid storage.
///
/// Follows the XDG convention: `$XDG_DATA_HOME/bookgrid` when set, otherwise
/// `~/.local/share/bookgrid`. Falls back to a relative `.bookgrid` directory
/// when no home directory can be determined, so logging still works in
/// minimal environments.
///
/// # Examples
///
/// ```
/// use bookgrid::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("bookgrid") || data_dir.ends_with(".bookgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("bookgrid");
        }
    }
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("bookgrid"),
        _ => PathBuf::from(".bookgrid"),
    }
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths from configuration (such as `theme_file`) may use `~` shorthand.
/// Paths without a tilde pass through untouched, as does the input when no
/// home directory is available.
///
/// # Examples
///
/// ```
/// use bookgrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };
    if path.starts_with("~/") {
        path.replacen('~', &home, 1)
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(expand_tilde("/themes/custom.toml"), "/themes/custom.toml");
    }

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(expand_tilde("themes/custom.toml"), "themes/custom.toml");
    }

    #[test]
    fn data_dir_ends_with_app_directory() {
        let dir = get_data_dir();
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(name == "bookgrid" || name == ".bookgrid");
    }
}
