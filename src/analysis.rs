use anyhow::Result;
use std::time::Instant;
use tracing::{debug, info};

use crate::classify::{detect_browser, is_image_path, parse_hour};
use crate::stats::{HitStats, LogRow};
use crate::{fetch, Args};

pub fn analyze_log(args: &Args) -> Result<HitStats> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting access log analysis");

    let csv_text = fetch::download_text(&args.url)?;
    let stats = process_log(&csv_text);

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );
    Ok(stats)
}

/// Tallies every CSV row of `csv_text`. Rows with fewer than three columns
/// are skipped; a row whose timestamp does not parse still counts everywhere
/// except the hourly totals.
pub fn process_log(csv_text: &str) -> HitStats {
    let start_time = Instant::now();
    let mut stats = HitStats::default();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    for (row_num, record) in reader.records().enumerate() {
        let row = match record {
            Ok(record) => LogRow::from_fields(&record),
            Err(e) => {
                debug!(action = "skip", component = "csv_reader", row = row_num + 1, error = %e, "Unreadable row");
                None
            }
        };
        let Some(row) = row else {
            stats.skipped_rows += 1;
            continue;
        };
        tally_row(&mut stats, &row);
    }

    let process_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "log_processing",
        total_hits = stats.total_hits,
        image_hits = stats.image_hits,
        skipped_rows = stats.skipped_rows,
        unparsed_timestamps = stats.unparsed_timestamps,
        duration_ms = process_time.as_millis(),
        "Processed log rows"
    );
    stats
}

fn tally_row(stats: &mut HitStats, row: &LogRow) {
    stats.total_hits += 1;

    if is_image_path(&row.path) {
        stats.image_hits += 1;
    }

    stats.record_browser(detect_browser(&row.user_agent));

    match parse_hour(&row.timestamp) {
        Some(hour) => stats.record_hour(hour),
        None => stats.unparsed_timestamps += 1,
    }
}
