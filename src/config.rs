pub const BOARD_SIZE: u8 = 10;

/// Base URL of the rules server when none is given on the command line.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Total character budget of the feedback log.
pub const DEFAULT_LOG_CAP: usize = 4000;

/// Seconds before an in-flight remote action is abandoned.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
