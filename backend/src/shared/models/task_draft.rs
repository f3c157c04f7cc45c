use crate::{
    task::Task,
    task_payload::TaskPayload,
    task_priority::TaskPriority,
    validation_error::{FieldError, ValidationError},
};

/// Unvalidated task fields: the defaults (create) or a stored task (update)
/// with a payload shallow-merged on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: String,
}

/// Task fields that passed the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: TaskPriority,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            completed: false,
            priority: TaskPriority::default().as_str().to_string(),
        }
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
            priority: task.priority.as_str().to_string(),
        }
    }
}

impl TaskDraft {
    pub fn merge(self, payload: TaskPayload) -> Self {
        Self {
            title: payload.title.unwrap_or(self.title),
            description: payload.description.unwrap_or(self.description),
            completed: payload.completed.unwrap_or(self.completed),
            priority: payload.priority.unwrap_or(self.priority),
        }
    }

    /// Trims the title and checks it and the priority. Collects every
    /// failing field instead of stopping at the first.
    pub fn validate(self) -> Result<TaskFields, ValidationError> {
        let mut errors = Vec::new();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.push(FieldError::required("title"));
        }

        let priority = match self.priority.parse::<TaskPriority>() {
            Ok(p) => Some(p),
            Err(unknown) => {
                errors.push(FieldError::invalid_enum("priority", &unknown.0));
                None
            }
        };

        match priority {
            Some(priority) if errors.is_empty() => Ok(TaskFields {
                title,
                description: self.description,
                completed: self.completed,
                priority,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}
