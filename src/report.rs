use std::fmt::Write;

use crate::stats::HitStats;

pub const NO_HITS_MESSAGE: &str = "No hits found in the log file.";

/// Renders the text report printed on stdout.
pub fn render_report(stats: &HitStats) -> String {
    let Some(image_percentage) = stats.image_percentage() else {
        return format!("{NO_HITS_MESSAGE}\n");
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Image requests account for {image_percentage:.1}% of all requests"
    );

    if let Some((browser, count)) = stats.most_popular_browser() {
        let _ = writeln!(out, "Most popular browser: {browser} ({count} hits)");
    }

    out.push_str("\nHourly hit totals:\n");
    for (hour, hits) in stats.hours_by_hits() {
        let _ = writeln!(out, "Hour {hour:02} has {hits} hits");
    }
    out
}

pub fn print_report(stats: &HitStats) {
    print!("{}", render_report(stats));
}
