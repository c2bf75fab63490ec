//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database handle is a pool
//! and the token service only holds key material.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs access tokens on registration and verifies bearer tokens on requests.
    pub tokens: TokenService,

    /// Offset from UTC deciding the current calendar day for habit checks.
    pub utc_offset_hours: i32,
}

impl AppState {
    /// Creates the shared state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service for issuing and verifying bearer tokens
    /// - `utc_offset_hours` - Offset deciding the current calendar day
    ///
    /// # Returns
    /// - `AppState` - State to attach to the router
    pub fn new(db: DatabaseConnection, tokens: TokenService, utc_offset_hours: i32) -> Self {
        Self {
            db,
            tokens,
            utc_offset_hours,
        }
    }
}
