//! Browser fingerprint attached to a speaker
//!
//! Only Internet Explorer matters to the qualification rules, but the raw
//! browser name is classified into the full closed set so the fingerprint
//! stays meaningful on its own.

use serde::{Deserialize, Serialize};

/// Known browser families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrowserName {
    #[default]
    Unknown,
    InternetExplorer,
    Edge,
    Firefox,
    Chrome,
    Opera,
    Safari,
    Dolphin,
    Konqueror,
    Linx,
}

/// Substring markers checked in order; the first hit wins.
///
/// Edge and Opera identify themselves alongside "Chrome", and Chrome alongside
/// "Safari", so the more specific markers come first.
const MARKERS: &[(&str, BrowserName)] = &[
    ("IE", BrowserName::InternetExplorer),
    ("MSIE", BrowserName::InternetExplorer),
    ("Trident", BrowserName::InternetExplorer),
    ("Internet Explorer", BrowserName::InternetExplorer),
    ("Edge", BrowserName::Edge),
    ("Edg/", BrowserName::Edge),
    ("Opera", BrowserName::Opera),
    ("OPR", BrowserName::Opera),
    ("Firefox", BrowserName::Firefox),
    ("Chrome", BrowserName::Chrome),
    ("Safari", BrowserName::Safari),
    ("Dolphin", BrowserName::Dolphin),
    ("Konqueror", BrowserName::Konqueror),
    ("Linx", BrowserName::Linx),
];

impl BrowserName {
    /// Classifies a raw browser name by case-sensitive substring match
    ///
    /// Anything that matches no marker is `Unknown`.
    pub fn from_raw(raw: &str) -> Self {
        MARKERS
            .iter()
            .find(|(marker, _)| raw.contains(marker))
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

/// A browser family plus its major version
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebBrowser {
    pub name: BrowserName,
    pub major_version: u32,
}

impl WebBrowser {
    pub fn new(raw_name: &str, major_version: u32) -> Self {
        Self {
            name: BrowserName::from_raw(raw_name),
            major_version,
        }
    }

    pub fn is_internet_explorer(&self) -> bool {
        self.name == BrowserName::InternetExplorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ie_markers() {
        assert_eq!(BrowserName::from_raw("IE"), BrowserName::InternetExplorer);
        assert_eq!(
            BrowserName::from_raw("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)"),
            BrowserName::InternetExplorer
        );
        assert_eq!(
            BrowserName::from_raw("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0)"),
            BrowserName::InternetExplorer
        );
    }

    #[test]
    fn test_chromium_derivatives_are_not_chrome() {
        let edge = "Mozilla/5.0 AppleWebKit/537.36 Chrome/120.0 Safari/537.36 Edg/120.0";
        let opera = "Mozilla/5.0 AppleWebKit/537.36 Chrome/120.0 Safari/537.36 OPR/105.0";
        let chrome = "Mozilla/5.0 AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

        assert_eq!(BrowserName::from_raw(edge), BrowserName::Edge);
        assert_eq!(BrowserName::from_raw(opera), BrowserName::Opera);
        assert_eq!(BrowserName::from_raw(chrome), BrowserName::Chrome);
    }

    #[test]
    fn test_plain_names() {
        assert_eq!(BrowserName::from_raw("Firefox"), BrowserName::Firefox);
        assert_eq!(BrowserName::from_raw("Safari"), BrowserName::Safari);
        assert_eq!(BrowserName::from_raw("Dolphin"), BrowserName::Dolphin);
        assert_eq!(BrowserName::from_raw("Konqueror"), BrowserName::Konqueror);
        assert_eq!(BrowserName::from_raw("Linx"), BrowserName::Linx);
    }

    #[test]
    fn test_unmatched_is_unknown() {
        assert_eq!(BrowserName::from_raw("test"), BrowserName::Unknown);
        assert_eq!(BrowserName::from_raw(""), BrowserName::Unknown);
        // case-sensitive: lowercase "ie" is not a marker
        assert_eq!(BrowserName::from_raw("movie player"), BrowserName::Unknown);
    }

    #[test]
    fn test_web_browser_new() {
        let browser = WebBrowser::new("IE", 6);
        assert!(browser.is_internet_explorer());
        assert_eq!(browser.major_version, 6);
    }
}
