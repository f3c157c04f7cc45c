use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    api_error::ApiError, app_state::SharedState, envelope::Envelope, task::Task,
    task_payload::TaskPayload,
};

type JsonPayload = Result<Json<TaskPayload>, JsonRejection>;

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_id(raw))
}

pub struct TaskController {}

impl TaskController {
    // GET /api/tasks
    pub async fn list(
        State(state): State<SharedState>,
    ) -> Result<Json<Envelope<Vec<Task>>>, ApiError> {
        let tasks = state.store.list_tasks()?;
        Ok(Json(Envelope::list(tasks)))
    }

    // POST /api/tasks
    pub async fn create(
        State(state): State<SharedState>,
        payload: JsonPayload,
    ) -> Result<(StatusCode, Json<Envelope<Task>>), ApiError> {
        let Json(payload) = payload?;
        let task = Task::create(payload, Utc::now())?;
        state.store.insert_task(&task)?;

        tracing::info!(task_id = %task.id, title = %task.title, "task created");
        Ok((StatusCode::CREATED, Json(Envelope::data(task))))
    }

    // GET /api/tasks/:id
    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<String>,
    ) -> Result<Json<Envelope<Task>>, ApiError> {
        let id = parse_id(&id)?;
        let task = state.store.get_task(id)?.ok_or(ApiError::NotFound)?;
        Ok(Json(Envelope::data(task)))
    }

    // PUT /api/tasks/:id
    //
    // The id is resolved before the body is looked at, so an unknown id is a
    // 404 whatever the payload. The merge runs inside the store against the
    // current task, so racing updates to different fields both land.
    pub async fn update(
        State(state): State<SharedState>,
        Path(id): Path<String>,
        payload: JsonPayload,
    ) -> Result<Json<Envelope<Task>>, ApiError> {
        let id = parse_id(&id)?;
        let payload = match payload {
            Ok(Json(payload)) => payload,
            Err(rejection) => {
                state.store.get_task(id)?.ok_or(ApiError::NotFound)?;
                return Err(rejection.into());
            }
        };

        let now = Utc::now();
        let task = state
            .store
            .update_task(id, &|current: &Task| current.apply(payload.clone(), now))?
            .ok_or(ApiError::NotFound)?;

        tracing::info!(task_id = %task.id, completed = task.completed, "task updated");
        Ok(Json(Envelope::data(task)))
    }

    // DELETE /api/tasks/:id
    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<String>,
    ) -> Result<Json<Envelope<()>>, ApiError> {
        let id = parse_id(&id)?;
        if !state.store.delete_task(id)? {
            return Err(ApiError::NotFound);
        }

        tracing::info!(task_id = %id, "task deleted");
        Ok(Json(Envelope::message("Task deleted")))
    }
}
