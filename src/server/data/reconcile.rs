//! Reconciliation of a parent's child rows against a desired list.
//!
//! A `ChildStore` exposes the handful of storage operations the strategies need. The
//! strategies never commit or roll back: they run on whatever connection the store was
//! built on, normally the caller's open transaction, and propagate the first error.

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::DbErr;

/// An item that may refer to an existing row.
pub trait Identified {
    fn id(&self) -> Option<i32>;
}

/// Storage port for rows owned by a parent row.
#[async_trait]
pub trait ChildStore {
    type Item: Send + Sync;

    /// Ids of every row currently owned by `parent_id`.
    async fn current_ids(&self, parent_id: i32) -> Result<Vec<i32>, DbErr>;

    /// Inserts `item` under `parent_id` and returns the new row id.
    async fn insert(&self, parent_id: i32, item: &Self::Item) -> Result<i32, DbErr>;

    /// Overwrites the scalar fields of row `id` with `item`.
    async fn update(&self, id: i32, item: &Self::Item) -> Result<(), DbErr>;

    /// Deletes the given rows, including anything that depends on them.
    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr>;

    /// Deletes every row owned by `parent_id`.
    async fn delete_by_parent(&self, parent_id: i32) -> Result<u64, DbErr>;
}

/// What a reconciliation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub inserted: Vec<i32>,
    pub updated: Vec<i32>,
    pub deleted: Vec<i32>,
    /// Resulting row id of each desired item, in input order.
    pub ids: Vec<i32>,
}

/// Reconciles by id.
///
/// Items whose id belongs to a current row update that row; items without an id, or
/// with an id that `parent_id` does not own, are inserted. Current rows not referenced
/// by any item are deleted afterwards.
///
/// # Arguments
/// - `store` - Storage for the child rows
/// - `parent_id` - Owner of the rows
/// - `desired` - The complete desired list
///
/// # Returns
/// - `Ok(ReconcileOutcome)` - Ids inserted, updated and deleted
/// - `Err(DbErr)` - First storage error; earlier writes are left to the caller's transaction
pub async fn diff_by_id<S>(
    store: &S,
    parent_id: i32,
    desired: &[S::Item],
) -> Result<ReconcileOutcome, DbErr>
where
    S: ChildStore + Sync,
    S::Item: Identified,
{
    let current: HashSet<i32> = store.current_ids(parent_id).await?.into_iter().collect();
    let mut kept = HashSet::new();
    let mut outcome = ReconcileOutcome::default();

    for item in desired {
        match item.id().filter(|id| current.contains(id)) {
            Some(id) => {
                store.update(id, item).await?;
                kept.insert(id);
                outcome.updated.push(id);
                outcome.ids.push(id);
            }
            None => {
                let id = store.insert(parent_id, item).await?;
                outcome.inserted.push(id);
                outcome.ids.push(id);
            }
        }
    }

    let mut to_delete: Vec<i32> = current.difference(&kept).copied().collect();
    to_delete.sort_unstable();

    if !to_delete.is_empty() {
        store.delete_by_ids(&to_delete).await?;
    }
    outcome.deleted = to_delete;

    Ok(outcome)
}

/// Deletes every row of `parent_id`, then inserts each desired item.
///
/// # Returns
/// - `Ok(ReconcileOutcome)` - Previous ids as deleted, new ids as inserted
/// - `Err(DbErr)` - First storage error
pub async fn replace_all<S>(
    store: &S,
    parent_id: i32,
    desired: &[S::Item],
) -> Result<ReconcileOutcome, DbErr>
where
    S: ChildStore + Sync,
{
    let mut deleted = store.current_ids(parent_id).await?;
    deleted.sort_unstable();

    if !deleted.is_empty() {
        store.delete_by_parent(parent_id).await?;
    }

    let mut inserted = Vec::with_capacity(desired.len());
    for item in desired {
        inserted.push(store.insert(parent_id, item).await?);
    }

    Ok(ReconcileOutcome {
        ids: inserted.clone(),
        inserted,
        updated: Vec::new(),
        deleted,
    })
}
