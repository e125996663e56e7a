//! HTTP handlers.
//!
//! Handlers check access first, then convert the request DTO to parameters, call a
//! service and convert the result back to a DTO.

pub mod forum;
pub mod settings;
