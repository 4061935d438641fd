// Linkshelf platform paths for macOS
// Data: ~/Library/Application Support/Linkshelf

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Linkshelf on macOS.
pub fn get_data_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Linkshelf")
}
