use log::LevelFilter;

/// Level for a `-v` count, `-q` winning over any verbosity.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence when set.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .format_target(false)
        .parse_env("RUST_LOG");

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
