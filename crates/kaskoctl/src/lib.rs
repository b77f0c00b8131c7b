//! Kasko Control - CLI client for the kasko scoring daemon.
//!
//! Sends a bundled sample trip to `kaskod` and renders the returned score
//! and premium.

pub mod client;
pub mod commands;
pub mod render;
pub mod view;
