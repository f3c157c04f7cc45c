use std::{collections::HashMap, sync::RwLock};

use uuid::Uuid;

use crate::{
    data_access::{
        store_error::StoreError,
        task_store::{sort_newest_first, TaskStore, TaskUpdate},
    },
    task::Task,
};

/// In-process store. Selected with `DATABASE_PATH=:memory:`; nothing
/// survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("task map lock poisoned".to_string())
}

impl TaskStore for MemoryStore {
    fn insert_task(&self, task: &Task) -> Result<(), StoreError> {
        self.tasks.write().map_err(poisoned)?.insert(task.id, task.clone());
        Ok(())
    }

    fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut tasks: Vec<Task> = self.tasks.read().map_err(poisoned)?.values().cloned().collect();
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().map_err(poisoned)?.get(&id).cloned())
    }

    fn update_task(&self, id: Uuid, update: &TaskUpdate<'_>) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let Some(current) = tasks.get(&id) else {
            return Ok(None);
        };
        let updated = update(current)?;
        tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    fn delete_task(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.tasks.write().map_err(poisoned)?.remove(&id).is_some())
    }
}
