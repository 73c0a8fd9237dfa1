use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future tied to the transaction it borrows.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// Execute a closure within a database transaction: commit on Ok, roll
/// back on Err. One transaction per mutation is this service's only
/// consistency boundary.
///
/// Callers pass `|txn| Box::pin(async move { ... })`.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R>,
{
    let txn = state.db().begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve the original error.
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
