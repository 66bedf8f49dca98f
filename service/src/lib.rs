//! Ambient configuration and logging for tools built on the meetings SDK.

pub mod config;
pub mod logging;
