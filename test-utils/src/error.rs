use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection, table creation or session store setup failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
