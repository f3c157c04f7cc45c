//! redb-backed task store.
//!
//! Tasks are postcard-encoded and keyed by the 16 id bytes. Every call runs in
//! its own transaction. redb allows one write transaction at a time, so an
//! update's read and write cannot interleave with another writer.

use redb::{Database, ReadableTable, TableDefinition};
use std::{path::Path, sync::Arc};
use uuid::Uuid;

use crate::{
    data_access::{
        store_error::StoreError,
        task_store::{sort_newest_first, TaskStore, TaskUpdate},
    },
    task::Task,
};

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");

/// Thin handle to the redb file. Cloneable (Arc inside).
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Open (or create) the database at the given path and make sure the
    /// tasks table exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(TASKS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    fn encode(task: &Task) -> Result<Vec<u8>, StoreError> {
        postcard::to_allocvec(task).map_err(|e| StoreError::Encode(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<Task, StoreError> {
        postcard::from_bytes(bytes).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl TaskStore for DataContext {
    fn insert_task(&self, task: &Task) -> Result<(), StoreError> {
        let bytes = Self::encode(task)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            tasks_table.insert(task.id.as_bytes().as_slice(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            tasks.push(Self::decode(value.value())?);
        }

        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        match tasks_table.get(id.as_bytes().as_slice())? {
            Some(data) => Ok(Some(Self::decode(data.value())?)),
            None => Ok(None),
        }
    }

    fn update_task(&self, id: Uuid, update: &TaskUpdate<'_>) -> Result<Option<Task>, StoreError> {
        let write_txn = self.db.begin_write()?;
        let updated;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let key = id.as_bytes();
            let current = match tasks_table.get(key.as_slice())? {
                Some(data) => Self::decode(data.value())?,
                None => return Ok(None),
            };
            updated = update(&current)?;
            let bytes = Self::encode(&updated)?;
            tasks_table.insert(key.as_slice(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(Some(updated))
    }

    fn delete_task(&self, id: Uuid) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            deleted = tasks_table.remove(id.as_bytes().as_slice())?.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }
}
