use uuid::Uuid;

use crate::{data_access::store_error::StoreError, task::Task, validation_error::ValidationError};

/// Turns the stored task into its replacement. Runs inside the store's write
/// lock, so it sees every update committed before it.
pub type TaskUpdate<'a> = dyn Fn(&Task) -> Result<Task, ValidationError> + 'a;

/// The document collection holding tasks.
///
/// Every call is atomic. Two updates racing on the same id are applied one
/// after the other, each against the result of the previous one.
pub trait TaskStore: Send + Sync {
    fn insert_task(&self, task: &Task) -> Result<(), StoreError>;

    /// All tasks, newest first.
    fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError>;

    /// Reads, rewrites and stores one task in a single step. `Ok(None)` if
    /// there is no task with that id, in which case `update` is never called.
    /// A `ValidationError` from `update` comes back as `StoreError::Rejected`
    /// and nothing is written.
    fn update_task(&self, id: Uuid, update: &TaskUpdate<'_>) -> Result<Option<Task>, StoreError>;

    /// `Ok(false)` if there was nothing to delete.
    fn delete_task(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Sort by created_at descending. Equal timestamps fall back to the
/// time-ordered id so the newer task still comes first.
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}
