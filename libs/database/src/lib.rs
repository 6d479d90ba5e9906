//! Database connectors and shared persistence utilities.
//!
//! Currently provides a MongoDB connector with configuration, health
//! checks and connection retry helpers.

pub mod common;
pub mod mongodb;
