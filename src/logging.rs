use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "ticketform=warn";
const VERBOSE_DIRECTIVE: &str = "ticketform=debug";

/// Installs the global subscriber. `RUST_LOG` wins over the defaults.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logs share the terminal with prompts, so keep them on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
