//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests (shape translation,
//! DTO conversion) and serve as defaults for the factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let settings = fixture::site_settings::entity();
//!
//! let branded = fixture::site_settings::entity_builder()
//!     .site_name("Frag Hub")
//!     .color_primary("#ff0000")
//!     .build();
//! ```

pub mod site_settings;
