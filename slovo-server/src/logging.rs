//! Logger initialization

/// Map a `-v` count to a default filter
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize `env_logger` based on verbosity; `RUST_LOG` still wins
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // A second initialization in the same process is ignored
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(verbose)),
    )
    .try_init();
}
