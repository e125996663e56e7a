use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::error::AppError;

/// One database transaction spanning a multi-row write.
///
/// Repositories and reconcilers run on `conn()`. The owner ends the unit with
/// `finish`; a unit dropped without finishing is rolled back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Opens a transaction on the pool.
    ///
    /// # Returns
    /// - `Ok(UnitOfWork)` - Open transaction
    /// - `Err(AppError::DbErr)` - Failed to acquire a connection or begin
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, AppError> {
        Ok(Self {
            txn: db.begin().await?,
        })
    }

    /// The connection every statement of this unit must go through.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits on `Ok`, rolls back on `Err`.
    ///
    /// The cause of a failure is logged here and replaced by
    /// `AppError::SaveFailed(failure_message)`, except for not-found and bad-request
    /// errors which reach the client unchanged.
    ///
    /// # Arguments
    /// - `result` - Outcome of the work done on `conn()`
    /// - `failure_message` - Client-facing message for a failed write
    ///
    /// # Returns
    /// - `Ok(T)` - Work committed
    /// - `Err(AppError)` - Work rolled back
    pub async fn finish<T>(
        self,
        result: Result<T, AppError>,
        failure_message: &str,
    ) -> Result<T, AppError> {
        match result {
            Ok(value) => match self.txn.commit().await {
                Ok(()) => Ok(value),
                Err(err) => {
                    tracing::error!("{}: commit failed: {}", failure_message, err);
                    Err(AppError::SaveFailed(failure_message.to_string()))
                }
            },
            Err(err) => {
                if let Err(rollback_err) = self.txn.rollback().await {
                    tracing::error!("{}: rollback failed: {}", failure_message, rollback_err);
                }

                if err.is_not_found() || matches!(err, AppError::BadRequest(_)) {
                    tracing::warn!("{}: {}", failure_message, err);
                    return Err(err);
                }

                tracing::error!("{}: {}", failure_message, err);
                Err(AppError::SaveFailed(failure_message.to_string()))
            }
        }
    }
}
