//! Application module
//!
//! Command-line configuration and process exit codes.

mod config;

pub use config::{print_help, print_version, Command, Config};

/// Exit codes for the dirtree binary
pub mod exit_code {
    /// Tree printed successfully
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred (filesystem or output)
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag)
    pub const INVALID: i32 = 3;
}
