pub mod cli;
pub mod configuration;
pub mod error;
pub mod image;
pub mod package;
pub mod progress;
pub mod session;
pub mod visualization;
