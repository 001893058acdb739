//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default endpoint returning the JSON array of users
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Cities offered by the filter control, independent of fetched data
pub const DEFAULT_CITIES: [&str; 3] = ["Moscow", "Kulm", "London"];

/// Default log file, written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "user-table.log";

/// Directory under the home directory holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".user-table";

/// Scheme prepended to a user's bare website hostname
pub const WEBSITE_SCHEME: &str = "http://";

/// Fallback shown when a transport failure carries no description
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Application name
pub const APP_NAME: &str = "User Table TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
