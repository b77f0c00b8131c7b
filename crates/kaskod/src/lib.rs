//! Kasko Daemon - Trip scoring backend.
//!
//! Engineers features from raw trip telemetry, scores them with the bundled
//! risk model and prices a premium, all behind a small localhost HTTP API.

pub mod config;
pub mod features;
pub mod model;
pub mod pricing;
pub mod routes;
pub mod server;
