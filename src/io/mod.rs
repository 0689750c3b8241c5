/// Command-line parsing and conversion orchestration
pub mod cli;
/// Layout constants and argument defaults
pub mod configuration;
/// Error types and stage attribution
pub mod error;
/// Source image loading and tileset export
pub mod image;
/// Extraction progress display
pub mod progress;
