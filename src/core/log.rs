use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "conversor=debug" } else { "off" }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbose flag. Output goes to stderr so it never mixes with the
/// interactive prompt on stdout.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .pretty()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "conversor=debug");
        assert_eq!(default_directive(false), "off");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
