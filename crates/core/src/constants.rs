/// Constants used throughout the dirguard codebase
// Environment variable names
pub const DIRGUARD_LOG_VAR: &str = "DIRGUARD_LOG";

// Exit codes
pub const EXIT_CONFIGURATION_ERROR: i32 = 1;
pub const EXIT_DELETION_FAILURES: i32 = 2;
