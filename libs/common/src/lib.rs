//! Common library for the rental catalog client
//!
//! This crate provides shared functionality used by the catalog crates,
//! including configuration loading, error handling and tracing setup.

pub mod config;
pub mod error;
pub mod telemetry;
