// Re-export command modules
pub mod args;
pub mod execute;
pub mod output;

// Re-export commonly used types
pub use args::Cli;
pub use execute::{enforce_entries, exit_code, run};
