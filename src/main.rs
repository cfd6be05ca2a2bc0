use clap::Parser;
use hitstats::{analyze_log, print_report, utils, Args};
use tracing::error;

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match analyze_log(&args) {
        Ok(stats) => print_report(&stats),
        Err(e) => {
            error!(action = "fail", component = "analysis", error = %e, "Analysis failed");
            eprintln!("{}", utils::format_error(&e));
            std::process::exit(1);
        }
    }
}
