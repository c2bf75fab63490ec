//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//! Members are identified by HS256 bearer tokens issued at registration.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, ownership checks and transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, CORS
//! - **Router** (`router`) - Axum route configuration and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Middleware** resolves the bearer token to a member where required
//! 3. **Controller** converts DTOs to params, calls the service
//! 4. **Service** executes business logic inside a transaction when it reads then writes
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
