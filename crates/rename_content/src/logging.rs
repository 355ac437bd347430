// crates/rename_content/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Installs the stderr logger for the binary.
///
/// `RUST_LOG` is honoured when set; otherwise only warnings are shown, or
/// everything down to debug when `verbose` is on. Records emitted through the
/// `log` macros in the library crates are forwarded to the same output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: logger initialization failed: {}", e);
    }
}
