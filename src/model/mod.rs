//! Wire contract shared with the admin UI.
//!
//! Everything here is plain serde data in camelCase JSON. Server-side domain
//! models convert to and from these types at the controller boundary.

pub mod api;
pub mod forum;
pub mod settings;
