//! Client for the task API: HTTP transport, local state and a text view.

pub mod api_client;
pub mod app;
pub mod models;
pub mod render;

pub use api_client::{ApiClient, ClientError, TaskService, DEFAULT_API_URL};
pub use app::TaskApp;
pub use models::{Envelope, Filter, Priority, Stats, Task, TaskForm, TaskPatch};
