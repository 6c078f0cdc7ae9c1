//! Classifiers for download sources given as links or bare identifiers.
//!
//! Every function is a pure predicate: malformed or hostile input simply
//! yields `false`. Patterns are anchored at the start of the input; the ones
//! that describe a complete token ([`is_url`], [`is_gdrive_id`]) are anchored
//! at the end as well.

use std::sync::LazyLock;

use regex::Regex;

static MAGNET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^magnet:\?.*xt=urn:(?:btih|btmh):(?:[a-zA-Z0-9]{32,40}|[a-z2-7]{32})").unwrap()
});

// scheme? user:pass@? www.? host.tld :port? /path ?query #fragment
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:rtmps?://|mms://|rtsp://|https?://|ftp://)?",
        r"(?:[^/:]+:[^/@]+@)?",
        r"(?:www\.)?",
        r"[^/:\s]+\.[^/:\s]+",
        r"(?::\d+)?",
        r"(?:/[^#\s]*[\s\S]*)?",
        r"(?:\?[^#\s]*)?",
        r"(?:#.*)?$",
    ))
    .unwrap()
});

static SHARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://.+\.gdtot\.\S+|https?://(?:filepress|filebee|appdrive|gdflix)\.\S+)",
    )
    .unwrap()
});

static GDRIVE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:tp:|sa:|mtp:)?(?:[a-zA-Z0-9_-]{33}|[a-zA-Z0-9_-]{19})|gdl|(?:tp:|mtp:)?root)$")
        .unwrap()
});

const GDRIVE_HOSTS: [&str; 2] = ["drive.google.com", "drive.usercontent.google.com"];
const TELEGRAM_PREFIXES: [&str; 2] = ["https://t.me/", "tg://openmessage?user_id="];

/// `magnet:?` URI carrying a `btih`/`btmh` exact topic.
pub fn is_magnet(url: &str) -> bool {
    MAGNET_RE.is_match(url)
}

/// Generic URL, with or without scheme. Absolute filesystem paths are rejected.
pub fn is_url(url: &str) -> bool {
    if url.starts_with('/') {
        return false;
    }
    URL_RE.is_match(url)
}

/// Substring test only, the input is not parsed.
pub fn is_gdrive_link(url: &str) -> bool {
    GDRIVE_HOSTS.iter().any(|host| url.contains(host))
}

pub fn is_telegram_link(url: &str) -> bool {
    TELEGRAM_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// GDTot, FilePress, FileBee, AppDrive and GDFlix front-ends.
pub fn is_share_link(url: &str) -> bool {
    SHARE_RE.is_match(url)
}

/// Bare Drive file/folder id (33 or 19 chars), optionally prefixed with
/// `tp:`, `sa:` or `mtp:`, plus the `gdl`/`root` aliases.
pub fn is_gdrive_id(id: &str) -> bool {
    GDRIVE_ID_RE.is_match(id)
}
