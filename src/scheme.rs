use crate::links::{
    is_gdrive_id, is_gdrive_link, is_magnet, is_share_link, is_telegram_link, is_url,
};
use crate::paths::{is_local_path, is_rclone_path};

/// Kind of a download source or destination, in precedence order.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    LocalPath,
    Magnet,
    TelegramLink,
    GdriveLink,
    ShareLink,
    Url,
    GdriveId,
    RclonePath,
    Unknown,
}

impl SchemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocalPath => "local_path",
            Self::Magnet => "magnet",
            Self::TelegramLink => "telegram_link",
            Self::GdriveLink => "gdrive_link",
            Self::ShareLink => "share_link",
            Self::Url => "url",
            Self::GdriveId => "gdrive_id",
            Self::RclonePath => "rclone_path",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of every classifier on a single input.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeReport {
    pub input: String,
    pub primary: SchemeKind,
    pub local_path: bool,
    pub magnet: bool,
    pub telegram_link: bool,
    pub gdrive_link: bool,
    pub share_link: bool,
    pub url: bool,
    pub gdrive_id: bool,
    pub rclone_path: bool,
}

impl SchemeReport {
    /// Every matching kind, highest precedence first.
    pub fn matches(&self) -> Vec<SchemeKind> {
        [
            (self.local_path, SchemeKind::LocalPath),
            (self.magnet, SchemeKind::Magnet),
            (self.telegram_link, SchemeKind::TelegramLink),
            (self.gdrive_link, SchemeKind::GdriveLink),
            (self.share_link, SchemeKind::ShareLink),
            (self.url, SchemeKind::Url),
            (self.gdrive_id, SchemeKind::GdriveId),
            (self.rclone_path, SchemeKind::RclonePath),
        ]
        .into_iter()
        .filter_map(|(hit, kind)| hit.then_some(kind))
        .collect()
    }

    pub fn is_known(&self) -> bool {
        self.primary != SchemeKind::Unknown
    }
}

pub fn classify(input: &str) -> SchemeReport {
    let mut report = SchemeReport {
        input: input.to_string(),
        primary: SchemeKind::Unknown,
        local_path: is_local_path(input),
        magnet: is_magnet(input),
        telegram_link: is_telegram_link(input),
        gdrive_link: is_gdrive_link(input),
        share_link: is_share_link(input),
        url: is_url(input),
        gdrive_id: is_gdrive_id(input),
        rclone_path: is_rclone_path(input),
    };
    report.primary = report
        .matches()
        .first()
        .copied()
        .unwrap_or(SchemeKind::Unknown);
    report
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn classification_is_repeatable(s in "\\PC{0,64}") {
            let first = classify(&s);
            prop_assert_eq!(&first, &classify(&s));
            prop_assert_eq!(first.primary == SchemeKind::Unknown, first.matches().is_empty());
        }
    }

    #[test]
    fn primary_follows_precedence() {
        let r = classify("https://drive.google.com/file/d/abc/view");
        assert_eq!(r.primary, SchemeKind::GdriveLink);
        assert!(r.url);
        assert_eq!(r.matches(), vec![SchemeKind::GdriveLink, SchemeKind::Url]);

        let r = classify("local:/srv/downloads");
        assert_eq!(r.primary, SchemeKind::LocalPath);
        assert!(r.rclone_path);
    }

    #[test]
    fn each_kind_is_reachable() {
        let magnet = format!("magnet:?xt=urn:btih:{}", "f".repeat(40));
        let cases = [
            (magnet.as_str(), SchemeKind::Magnet),
            ("https://t.me/c/1/2", SchemeKind::TelegramLink),
            ("https://filepress.store/file/1", SchemeKind::ShareLink),
            ("https://example.com/a.zip", SchemeKind::Url),
            ("tp:root", SchemeKind::GdriveId),
            ("gdrive:Movies", SchemeKind::RclonePath),
            ("just words", SchemeKind::Unknown),
        ];
        for (input, kind) in cases {
            assert_eq!(classify(input).primary, kind, "{input}");
        }
    }

    #[test]
    fn unknown_has_no_matches() {
        let r = classify("");
        assert!(!r.is_known());
        assert!(r.matches().is_empty());
        assert_eq!(r.primary.to_string(), "unknown");
    }
}
