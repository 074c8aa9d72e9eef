//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "DISPATCH_LOG";

fn main() {
    init_logging();
    if let Err(err) = dispatch_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

/// Route `log` records from the library crates to stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[expect(clippy::print_stderr, reason = "the CLI reports fatal errors on stderr")]
fn report(err: &dispatch_cli::CliError) {
    eprintln!("dispatch: {err}");
}
