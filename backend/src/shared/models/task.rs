use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    task_draft::{TaskDraft, TaskFields},
    task_payload::TaskPayload,
    task_priority::TaskPriority,
    validation_error::ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: TaskPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new task from a create payload. Ids are UUID v7, so they sort
    /// in creation order.
    pub fn create(payload: TaskPayload, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let fields = TaskDraft::default().merge(payload).validate()?;
        Ok(Self::from_fields(Uuid::now_v7(), fields, now, now))
    }

    /// Shallow-merges an update payload and re-validates the result.
    /// `updated_at` never moves backwards.
    pub fn apply(&self, payload: TaskPayload, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let fields = TaskDraft::from(self).merge(payload).validate()?;
        Ok(Self::from_fields(
            self.id,
            fields,
            self.created_at,
            now.max(self.updated_at),
        ))
    }

    fn from_fields(
        id: Uuid,
        fields: TaskFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
            priority: fields.priority,
            created_at,
            updated_at,
        }
    }
}
