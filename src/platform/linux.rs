// Linkshelf platform paths for Linux
// Data: ~/.local/share/linkshelf

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Linkshelf on Linux.
/// Uses `$XDG_DATA_HOME/linkshelf` if set, otherwise `~/.local/share/linkshelf`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("linkshelf")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("linkshelf")
    }
}
