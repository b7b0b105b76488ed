use log::{LevelFilter, SetLoggerError};

/// Install the process logger.
///
/// Defaults to `info` for every module; `RUST_LOG` overrides it. Returns an
/// error if a logger was already installed.
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
}

/// Logger for tests. Safe to call from every test.
pub fn init_for_tests() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Debug)
        .try_init();
}
