// Version information for the search gateway

/// Full version string
pub const VERSION: &str = "v0.1.0-search-gateway-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "duckduckgo-search",
    "search-throttle",
    "browser-impersonation",
    "text-extraction",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Search Gateway {} ({})", VERSION_NUMBER, BUILD_DATE)
}
