/// Command-line parsing and command dispatch
pub mod cli;
/// Fixed constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Swatch rasterization and PNG export
pub mod image;
