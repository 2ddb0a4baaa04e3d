// iconic - Change directory icons easily on macOS, providing an icon directory
//
// This is the library crate containing the traversal, exclusion and assignment logic.
// The binary crate (main.rs) provides the command line entry point.

pub mod cli;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use cli::Cli;
pub use config::ConfigManager;
pub use models::{AssignmentReport, TraversalOptions, UserConfig};
pub use services::{IconSetter, RunError, RunRequest, SystemIconSetter, execute};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
