//! Backend worker: owns the tokio runtime and the analysis transport.

pub mod commands;
pub mod runtime;
