//! Application state management.
//!
//! The state contains the loaded configuration and the MongoDB client,
//! and is cloned for each request handler (inexpensive Arc clones).

use mongodb::{Client, Database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
