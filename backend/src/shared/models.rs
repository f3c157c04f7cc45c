pub mod app_state;
pub mod settings;
pub mod task;
pub mod task_draft;
pub mod task_priority;
pub mod validation_error;
