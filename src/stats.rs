use std::fmt;

pub const HOURS_PER_DAY: usize = 24;

/// Browser families recognized from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    InternetExplorer,
    Chrome,
    Firefox,
    Safari,
    Other,
}

impl Browser {
    pub fn label(self) -> &'static str {
        match self {
            Self::InternetExplorer => "Internet Explorer",
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One data line of the access log. Columns past the user agent
/// (status, bytes) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub path: String,
    pub timestamp: String,
    pub user_agent: String,
}

impl LogRow {
    /// Builds a row from already-split fields, or `None` when fewer than
    /// three columns are present.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let path = fields.next()?.trim().to_string();
        let timestamp = fields.next()?.trim().to_string();
        let user_agent = fields.next()?.trim().to_string();
        Some(Self {
            path,
            timestamp,
            user_agent,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitStats {
    pub total_hits: u64,
    pub image_hits: u64,
    /// Counts per browser, kept in the order each browser was first seen.
    pub browser_counts: Vec<(Browser, u64)>,
    /// Indexed by hour of day; every hour is present, zero or not.
    pub hour_counts: [u64; HOURS_PER_DAY],
    pub skipped_rows: u64,
    pub unparsed_timestamps: u64,
}

impl Default for HitStats {
    fn default() -> Self {
        Self {
            total_hits: 0,
            image_hits: 0,
            browser_counts: Vec::new(),
            hour_counts: [0; HOURS_PER_DAY],
            skipped_rows: 0,
            unparsed_timestamps: 0,
        }
    }
}

impl HitStats {
    pub fn record_browser(&mut self, browser: Browser) {
        match self.browser_counts.iter_mut().find(|(b, _)| *b == browser) {
            Some((_, count)) => *count += 1,
            None => self.browser_counts.push((browser, 1)),
        }
    }

    pub fn record_hour(&mut self, hour: u32) {
        if let Some(slot) = self.hour_counts.get_mut(hour as usize) {
            *slot += 1;
        }
    }

    pub fn browser_count(&self, browser: Browser) -> u64 {
        self.browser_counts
            .iter()
            .find(|(b, _)| *b == browser)
            .map_or(0, |(_, count)| *count)
    }

    /// Share of image requests in percent, `None` for an empty log.
    pub fn image_percentage(&self) -> Option<f64> {
        if self.total_hits == 0 {
            return None;
        }
        Some(self.image_hits as f64 / self.total_hits as f64 * 100.0)
    }

    /// Browser with the most hits. Ties go to the browser seen first.
    pub fn most_popular_browser(&self) -> Option<(Browser, u64)> {
        self.browser_counts
            .iter()
            .copied()
            .fold(None, |best, (browser, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((browser, count)),
            })
    }

    /// All 24 hours, busiest first. Equal counts keep ascending hour order.
    pub fn hours_by_hits(&self) -> Vec<(u32, u64)> {
        let mut hours: Vec<(u32, u64)> = (0u32..)
            .zip(self.hour_counts.iter().copied())
            .collect();
        hours.sort_by(|a, b| b.1.cmp(&a.1));
        hours
    }
}
