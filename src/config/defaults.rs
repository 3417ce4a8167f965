//! Default configuration values

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Process exit status on success
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for usage, validation and output errors
pub const EXIT_FAILURE: i32 = 1;

/// Program name used in the usage text
pub const APP_NAME: &str = "quadrant-pi";
