//! Runs the client against a real server on an ephemeral port.

use std::{net::SocketAddr, sync::Arc};

use taskapp_client::{
    app::{LookupError, CONNECTIVITY_ERROR},
    ApiClient, Filter, Priority, TaskApp, TaskForm, TaskPatch,
    TaskService,
};
use taskapp_server::{app_state::AppState, map_routes, MemoryStore};
use tokio::net::TcpListener;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = map_routes(Arc::new(AppState::new(MemoryStore::new())));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> ApiClient {
    ApiClient::new(format!("http://{addr}/api"))
}

#[tokio::test]
async fn empty_list_envelope() {
    let addr = spawn_server().await;
    let envelope = client(addr).list().await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.count, Some(0));
    assert_eq!(envelope.data, Some(Vec::new()));
}

#[tokio::test]
async fn buy_milk_over_http() {
    let addr = spawn_server().await;
    let api = client(addr);

    let created = api
        .create(&TaskForm {
            title: "Buy milk".into(),
            description: String::new(),
            priority: Priority::High,
        })
        .await
        .unwrap();
    assert!(created.success);
    let task = created.data.unwrap();
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);

    let updated = api.update(&task.id, &TaskPatch::completed(true)).await.unwrap();
    let updated = updated.data.unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Buy milk");

    let deleted = api.delete(&task.id).await.unwrap();
    assert!(deleted.success);
    assert_eq!(deleted.message.as_deref(), Some("Task deleted"));

    let missing = api.update(&task.id, &TaskPatch::completed(false)).await.unwrap();
    assert!(!missing.success);
    assert_eq!(missing.message.as_deref(), Some("Task not found"));
}

#[tokio::test]
async fn app_resyncs_after_every_action() {
    let addr = spawn_server().await;
    let mut app = TaskApp::new(client(addr));
    app.load().await;
    assert!(!app.loading);
    assert!(app.tasks.is_empty());

    for title in ["First", "Second"] {
        app.form.title = title.into();
        app.submit().await;
    }
    let titles: Vec<_> = app.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);

    let first = app.tasks[1].clone();
    app.toggle_complete(&first.id).await;
    app.set_filter(Filter::Done);
    assert_eq!(app.visible().len(), 1);
    assert_eq!(app.visible()[0].id, first.id);

    app.start_edit(&first);
    app.form.priority = Priority::Low;
    app.submit().await;
    let edited = app.task(&first.id).unwrap();
    assert_eq!(edited.priority, Priority::Low);
    assert!(edited.completed);

    app.delete(&first.id, |_| true).await;
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.stats().total, 1);
    assert_eq!(app.error, None);
}

#[tokio::test]
async fn server_rejection_does_not_surface_as_error() {
    let addr = spawn_server().await;
    let mut app = TaskApp::new(client(addr));
    app.load().await;

    app.edit_id = Some("not-an-id".into());
    app.form.title = "Edit of nothing".into();
    app.submit().await;

    assert_eq!(app.error, None);
    assert_eq!(app.edit_id, None);
    assert!(app.tasks.is_empty());
}

#[tokio::test]
async fn unreachable_server_shows_connectivity_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut app = TaskApp::new(client(addr));
    app.load().await;
    assert!(!app.loading);
    assert!(app.tasks.is_empty());
    assert_eq!(app.error.as_deref(), Some(CONNECTIVITY_ERROR));
    assert_eq!(
        app.resolve("0190"),
        Err(LookupError::Unavailable(CONNECTIVITY_ERROR.to_string()))
    );
}
