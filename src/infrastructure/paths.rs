//! Path manipulation utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for trace output.
///
/// The directory is `/host/.local/share/zellij/bookgrid` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder Zellij was started in, which is usually the home directory.
///
/// # Examples
///
/// ```
/// use bookgrid::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/bookgrid"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookgrid")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use bookgrid::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leading_tilde_expands() {
        assert_eq!(expand_tilde("~/lib/~old/books.json"), "/host/lib/~old/books.json");
        assert_eq!(expand_tilde("~user/books.json"), "~user/books.json");
        assert_eq!(expand_tilde("books.json"), "books.json");
    }

    #[test]
    fn data_dir_is_under_host() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("bookgrid"));
    }
}
