//! Server-side API backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Transaction boundaries and orchestration
//! - **Data Layer** (`data/`) - Repositories and the child-row reconciler
//! - **Model Layer** (`model/`) - Domain models, parameters and the settings shape translator
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and session access
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** checks access, converts the DTO to params, calls a service
//! 3. **Service** opens a `UnitOfWork` for writes and calls repositories on it
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

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
