use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks` and `PUT /api/tasks/:id`.
///
/// Every key is optional; an absent key (or `null`) leaves the target field
/// untouched. Unknown keys, including `_id` and the timestamps, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}
