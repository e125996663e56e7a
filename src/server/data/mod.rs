//! Database repository layer for the settings aggregate.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait`, so the same code runs on the pool or inside a transaction.

pub mod forum;
pub mod gallery;
pub mod reconcile;
pub mod settings;
pub mod user;

#[cfg(test)]
mod test;
