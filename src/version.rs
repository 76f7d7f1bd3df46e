// Version information for the Try-On Relay Node

/// Full version string
pub const VERSION: &str = "v0.1.0-tryon-relay-2026-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-30";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Try-On Relay Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
