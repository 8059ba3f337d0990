//! Application constants

/// Posts returned by the unfiltered feed route
pub const FEED_LIMIT: usize = 5;

/// Redirect hops followed when resolving a QR payload
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Caption substring (case-insensitive) selecting posts for the gform route
pub const GFORM_NEEDLE: &str = "gform";

/// `__typename` of multi-image posts
pub const CAROUSEL_TYPENAME: &str = "GraphSidecar";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEB_BASE_URL: &str = "https://www.instagram.com";
pub const DEFAULT_API_BASE_URL: &str = "https://i.instagram.com";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Headers sent to the public profile page endpoint
pub const WEB_PROFILE_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", BROWSER_USER_AGENT),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Cookie", "ig_did=; ig_nrcb=1; csrftoken=; mid=;"),
    ("Connection", "keep-alive"),
    ("Sec-Fetch-Dest", "document"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Sec-Fetch-Site", "none"),
    ("Sec-Fetch-User", "?1"),
    ("Cache-Control", "max-age=0"),
];

/// Headers sent to the web_profile_info API endpoint
pub const PROFILE_INFO_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", BROWSER_USER_AGENT),
    ("Accept", "*/*"),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("X-IG-App-ID", "936619743392459"),
    ("X-Requested-With", "XMLHttpRequest"),
];
