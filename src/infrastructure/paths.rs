//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the
//! Zellij plugin sandbox, where the host filesystem is mounted under
//! `/host`. It handles tilde expansion and storage location management.

use std::path::PathBuf;

/// Returns the data directory for Zatalog files.
///
/// The directory is located at `/host/.local/share/zellij/zatalog` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available.
///
/// This typically resolves to the user's home directory when Zellij is
/// started from a home directory terminal, making the actual path
/// `~/.local/share/zellij/zatalog`. The seed file `catalog.json` and the
/// trace output live within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zatalog")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the sandbox environment the host's home directory (`~`) maps to
/// `/host`; this converts tilde-prefixed paths to their sandbox equivalents.
///
/// # Examples
///
/// ```
/// use zatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display purposes.
///
/// # Examples
///
/// ```
/// use zatalog::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/home/user/catalog.json"), "/home/user/catalog.json");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion_covers_the_sandbox_cases() {
        assert_eq!(expand_tilde("~/a/b"), "/host/a/b");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/x"), "/x");
        assert_eq!(expand_tilde("relative"), "relative");
    }

    #[test]
    fn host_prefix_is_stripped_once() {
        assert_eq!(strip_host_prefix("/host/x"), "/x");
        assert_eq!(strip_host_prefix("/y"), "/y");
    }
}
