// Requests
pub mod task_payload;

// Responses
pub mod envelope;
pub mod health_response;
