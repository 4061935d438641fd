// Linkshelf platform paths for Windows
// Data: %APPDATA%/Linkshelf

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Linkshelf on Windows.
/// Uses `%APPDATA%/Linkshelf`, falling back to the current directory if
/// `APPDATA` is unset.
pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("."));
    PathBuf::from(appdata).join("Linkshelf")
}
