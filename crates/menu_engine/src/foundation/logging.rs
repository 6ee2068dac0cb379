//! Logging setup

use log::LevelFilter;

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still takes precedence when set. Unknown level names fall
/// back to `info`.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    // A second initialization (tests, embedding hosts) is not an error for us
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_env("RUST_LOG")
        .try_init();
}

/// Map a configured level name onto a filter
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}
