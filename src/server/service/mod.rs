//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They own transaction boundaries: every multi-row write runs inside one
//! `UnitOfWork`, and only the service that opened it decides commit or rollback.

pub mod forum;
pub mod settings;
pub mod unit_of_work;
