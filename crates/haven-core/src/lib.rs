//! Haven Core — configuration, data directory layout, error type.

pub mod config;
pub mod error;

pub use config::{DataPaths, HavenConfig, ModelSettings};
pub use error::{Error, Result};
