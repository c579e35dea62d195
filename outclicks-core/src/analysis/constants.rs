pub const DEFAULT_LOG_FILE: &str = "./logs/rmn_weblog_sample_50k.log";
pub const DEFAULT_EXIT_PREFIX: &str = "/out/";
pub const DEFAULT_ERROR_BUDGET: usize = 20;

/// Aggregation key reported for exit events whose timestamp has no readable minute.
pub const CORRUPT_MINUTE_KEY: u16 = 404;
