use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins
/// over the `--verbose` default.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}

/// Top-level message on the first line, the chain of causes on the second.
pub fn format_error(err: &anyhow::Error) -> String {
    let causes: Vec<String> = err.chain().skip(1).map(|cause| cause.to_string()).collect();
    if causes.is_empty() {
        err.to_string()
    } else {
        format!("{err}\n{}", causes.join(": "))
    }
}
