//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings and CLI handling
//! - User config file loading
//! - Platform-specific startup and error reporting

pub mod app;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use settings::LumenSettings;
