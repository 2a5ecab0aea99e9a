//! CLI command implementations

pub mod build;
pub mod completions;
pub mod config;
pub mod verify;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use verify::VerifyArgs;
