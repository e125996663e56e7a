//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request data from controllers into services.

pub mod forum;
pub mod gallery;
pub mod settings;
