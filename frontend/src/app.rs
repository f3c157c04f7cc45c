//! Client state and the user actions that change it.
//!
//! Every mutation is followed by a full reload of the list; local state is
//! never patched in place.

use thiserror::Error;

use crate::{
    api_client::{ClientError, TaskService},
    models::{Filter, Stats, Task, TaskForm, TaskPatch},
};

pub const CONNECTIVITY_ERROR: &str = "No se pudo conectar con el servidor.";
pub const SAVE_ERROR: &str = "Error al guardar la tarea.";
pub const DELETE_PROMPT: &str = "¿Eliminar esta tarea?";

/// Why a task id given on the command line could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The list never loaded, so no id can be checked. Carries the error slot.
    #[error("{0}")]
    Unavailable(String),
    #[error("no task matches {0}")]
    NoMatch(String),
}

pub struct TaskApp<S> {
    service: S,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub form: TaskForm,
    pub edit_id: Option<String>,
    pub filter: Filter,
    pub error: Option<String>,
}

impl<S: TaskService> TaskApp<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            loading: true,
            form: TaskForm::default(),
            edit_id: None,
            filter: Filter::All,
            error: None,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch the whole list. A failed fetch keeps whatever was shown before.
    pub async fn load(&mut self) {
        match self.service.list().await {
            Ok(envelope) => self.tasks = envelope.data.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "loading tasks failed");
                self.error = Some(CONNECTIVITY_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Create or update from the form, then reload.
    ///
    /// The server's verdict is not inspected: any answer clears the form.
    /// Only an unreachable server keeps the draft around.
    pub async fn submit(&mut self) {
        if self.form.title.trim().is_empty() {
            return;
        }

        let result = match &self.edit_id {
            Some(id) => self
                .service
                .update(id, &TaskPatch::from(&self.form))
                .await
                .map(|_| ()),
            None => self.service.create(&self.form).await.map(|_| ()),
        };

        if let Err(ClientError::Connectivity(e)) = result {
            tracing::warn!(error = %e, "saving task failed");
            self.error = Some(SAVE_ERROR.to_string());
            return;
        }

        self.form = TaskForm::default();
        self.edit_id = None;
        self.load().await;
    }

    pub async fn toggle_complete(&mut self, id: &str) {
        let Some(completed) = self.task(id).map(|t| t.completed) else {
            return;
        };
        let result = self.service.update(id, &TaskPatch::completed(!completed)).await;
        self.after_mutation(result.map(|_| ())).await;
    }

    /// Deletes after `confirm` agrees to [`DELETE_PROMPT`].
    pub async fn delete(&mut self, id: &str, confirm: impl FnOnce(&str) -> bool) {
        if !confirm(DELETE_PROMPT) {
            return;
        }
        let result = self.service.delete(id).await;
        self.after_mutation(result.map(|_| ())).await;
    }

    async fn after_mutation(&mut self, result: Result<(), ClientError>) {
        if let Err(ClientError::Connectivity(e)) = result {
            tracing::warn!(error = %e, "task request failed");
            self.error = Some(CONNECTIVITY_ERROR.to_string());
            return;
        }
        self.load().await;
    }

    pub fn start_edit(&mut self, task: &Task) {
        self.edit_id = Some(task.id.clone());
        self.form = TaskForm::from(task);
    }

    pub fn cancel_edit(&mut self) {
        self.edit_id = None;
        self.form = TaskForm::default();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let done = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total,
            done,
            pending: total - done,
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Exact id, or a prefix that matches exactly one task.
    pub fn find(&self, id_or_prefix: &str) -> Option<&Task> {
        if let Some(task) = self.task(id_or_prefix) {
            return Some(task);
        }
        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) if !id_or_prefix.is_empty() => Some(task),
            _ => None,
        }
    }

    /// `find` for commands that act on one task. While the error slot is set
    /// the list cannot be trusted, so that error is reported instead of a
    /// missing id.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Task, LookupError> {
        if let Some(error) = &self.error {
            return Err(LookupError::Unavailable(error.clone()));
        }
        self.find(id_or_prefix)
            .ok_or_else(|| LookupError::NoMatch(id_or_prefix.to_string()))
    }
}
