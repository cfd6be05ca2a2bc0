use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hitstats",
    about = "Download a web server access log (CSV) and summarize image, browser and hourly traffic",
    version,
    long_about = None
)]
pub struct Args {
    /// URL of the CSV access log to analyze
    #[arg(long)]
    pub url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
