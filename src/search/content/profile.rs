//! Browser impersonation profile
//!
//! Page visits always present the same browser identity: one header set
//! plus the name of the handshake fingerprint it pairs with. Upgrading the
//! disguise means adding a new profile constant here and pointing
//! [`DEFAULT_PROFILE`] at it.

/// Fixed identity a fetch presents to the target site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserProfile {
    /// Fingerprint target, in curl-impersonate naming (e.g. `chrome110`)
    pub name: &'static str,
    pub user_agent: &'static str,
    /// Request headers in send order, `User-Agent` excluded
    pub headers: &'static [(&'static str, &'static str)],
}

/// Desktop Chrome on Windows
pub const CHROME_110: BrowserProfile = BrowserProfile {
    name: "chrome110",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    headers: &[
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
        ("Accept-Language", "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Sec-Fetch-User", "?1"),
        ("Cache-Control", "max-age=0"),
    ],
};

pub const DEFAULT_PROFILE: BrowserProfile = CHROME_110;
