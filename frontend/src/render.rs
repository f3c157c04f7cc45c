use crate::{
    api_client::TaskService,
    app::TaskApp,
    models::{Filter, Task},
};

/// Plain-text view of the app: header, stats, error slot, filter tabs and
/// the visible tasks.
pub fn render<S: TaskService>(app: &TaskApp<S>) -> String {
    let stats = app.stats();
    let mut out = String::from("TaskApp\n");
    out.push_str(&format!(
        "Total: {}  Completadas: {}  Pendientes: {}\n",
        stats.total, stats.done, stats.pending
    ));
    if let Some(error) = &app.error {
        out.push_str(&format!("⚠️ {error}\n"));
    }

    let tabs: Vec<String> = [Filter::All, Filter::Active, Filter::Done]
        .into_iter()
        .map(|f| {
            if f == app.filter {
                format!("[{}]", f.label())
            } else {
                f.label().to_string()
            }
        })
        .collect();
    out.push_str(&tabs.join("  "));
    out.push_str("\n\n");

    let visible = app.visible();
    if app.loading {
        out.push_str("Cargando tareas...\n");
    } else if visible.is_empty() {
        out.push_str("Sin tareas en esta categoría.\n");
    } else {
        for task in visible {
            out.push_str(&render_task(task));
        }
    }
    out
}

fn render_task(task: &Task) -> String {
    let check = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{check}] {} ({})  {}\n",
        task.title,
        task.priority.label(),
        task.id
    );
    if !task.description.is_empty() {
        line.push_str(&format!("    {}\n", task.description));
    }
    line
}
