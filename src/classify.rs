use chrono::{NaiveDateTime, Timelike};

use crate::patterns::{BROWSER_PATTERNS, IMAGE_PATTERN};
use crate::stats::Browser;

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

pub fn is_image_path(path: &str) -> bool {
    IMAGE_PATTERN.is_match(path)
}

pub fn detect_browser(user_agent: &str) -> Browser {
    BROWSER_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(user_agent))
        .map_or(Browser::Other, |(browser, _)| *browser)
}

/// Hour of day (0-23) of a `MM/DD/YYYY HH:MM:SS` timestamp, `None` if it
/// does not parse.
pub fn parse_hour(timestamp: &str) -> Option<u32> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn image_match_is_case_insensitive_and_anchored() {
        assert_that!(is_image_path("photo.JPG")).is_true();
        assert_that!(is_image_path("photo.png")).is_true();
        assert_that!(is_image_path("/a/b/image.PNG")).is_true();
        assert_that!(is_image_path("/a/b/icon.Gif")).is_true();
        assert_that!(is_image_path("photo.jpgx")).is_false();
        assert_that!(is_image_path("image.pngx")).is_false();
        assert_that!(is_image_path("/index.html")).is_false();
        assert_that!(is_image_path("/png")).is_false();
    }

    #[test]
    fn chrome_wins_over_safari() {
        let ua = "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0 Safari/537.36";
        assert_eq!(detect_browser(ua), Browser::Chrome);
    }

    #[test]
    fn detects_each_family() {
        assert_eq!(
            detect_browser("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)"),
            Browser::InternetExplorer
        );
        assert_eq!(
            detect_browser("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko"),
            Browser::InternetExplorer
        );
        assert_eq!(
            detect_browser("Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0"),
            Browser::Firefox
        );
        assert_eq!(
            detect_browser("Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/16.0 Safari/605.1.15"),
            Browser::Safari
        );
        assert_eq!(detect_browser("curl/8.0.1"), Browser::Other);
        assert_eq!(detect_browser(""), Browser::Other);
    }

    #[test]
    fn browser_match_ignores_case() {
        assert_eq!(detect_browser("mozilla chrome/90"), Browser::Chrome);
    }

    #[test]
    fn parses_hour_from_timestamp() {
        assert_eq!(parse_hour("01/27/2014 00:00:00"), Some(0));
        assert_eq!(parse_hour("12/31/2020 23:59:59"), Some(23));
        assert_eq!(parse_hour("01/01/2020 10:00:00"), Some(10));
    }

    #[test]
    fn rejects_bad_timestamps() {
        assert_eq!(parse_hour(""), None);
        assert_eq!(parse_hour("2020-01-01 10:00:00"), None);
        assert_eq!(parse_hour("13/01/2020 10:00:00"), None);
        assert_eq!(parse_hour("01/01/2020 25:00:00"), None);
        assert_eq!(parse_hour("01/01/2020"), None);
    }
}
