pub mod analysis;
pub mod args;
pub mod classify;
pub mod fetch;
pub mod patterns;
pub mod report;
pub mod stats;
pub mod utils;

pub use analysis::{analyze_log, process_log};
pub use args::Args;
pub use classify::{detect_browser, is_image_path, parse_hour};
pub use report::{print_report, render_report};
pub use stats::{Browser, HitStats, LogRow};
