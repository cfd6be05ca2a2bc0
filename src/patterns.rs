use regex::Regex;
use std::sync::LazyLock;

use crate::stats::Browser;

/// Paths ending in one of these extensions count as image requests.
pub static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\.(jpg|gif|png)$"));

/// Browser rules in evaluation order. The first matching rule wins, so
/// Chrome must stay ahead of Safari (Chrome user agents also carry `Safari/`).
pub static BROWSER_PATTERNS: LazyLock<Vec<(Browser, Regex)>> = LazyLock::new(|| {
    [
        (Browser::InternetExplorer, r"(?i)(MSIE|Trident/)"),
        (Browser::Chrome, r"(?i)Chrome/"),
        (Browser::Firefox, r"(?i)Firefox/"),
        (Browser::Safari, r"(?i)Safari/"),
    ]
    .into_iter()
    .map(|(browser, pattern)| (browser, compile(pattern)))
    .collect()
});

// Only ever called with the literals above.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is a valid regex")
}
