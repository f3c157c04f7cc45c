use clap::{Parser, Subcommand};
use taskapp_client::{
    app::{self, LookupError},
    render::render,
    ApiClient, Filter, Priority, TaskApp, TaskService, DEFAULT_API_URL,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "taskapp", about = "Manage tasks on a TaskApp server")]
struct Cli {
    /// API root of the server
    #[arg(long, env = "TASKAPP_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Which tasks to show
    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the task list (default)
    List,
    /// Create a task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
    },
    /// Edit a task's title, description or priority
    Edit {
        /// Task id or a unique prefix of it
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
    },
    /// Flip a task between done and pending
    Toggle { id: String },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut app = TaskApp::new(ApiClient::new(cli.api_url));
    app.set_filter(cli.filter);
    app.load().await;

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add {
            title,
            description,
            priority,
        } => {
            app.form.title = title;
            app.form.description = description;
            app.form.priority = priority;
            app.submit().await;
        }
        Command::Edit {
            id,
            title,
            description,
            priority,
        } => {
            let task = match app.resolve(&id) {
                Ok(task) => task.clone(),
                Err(e) => return report(&app, e),
            };
            app.start_edit(&task);
            if let Some(title) = title {
                app.form.title = title;
            }
            if let Some(description) = description {
                app.form.description = description;
            }
            if let Some(priority) = priority {
                app.form.priority = priority;
            }
            app.submit().await;
        }
        Command::Toggle { id } => {
            let id = match app.resolve(&id) {
                Ok(task) => task.id.clone(),
                Err(e) => return report(&app, e),
            };
            app.toggle_complete(&id).await;
        }
        Command::Delete { id, yes } => {
            let id = match app.resolve(&id) {
                Ok(task) => task.id.clone(),
                Err(e) => return report(&app, e),
            };
            let confirmed = yes || confirm(app::DELETE_PROMPT).await?;
            app.delete(&id, |_| confirmed).await;
        }
    }

    print!("{}", render(&app));
    Ok(())
}

/// An unreachable server still gets the normal view with its error line; an
/// unknown id is a command failure.
fn report<S: TaskService>(app: &TaskApp<S>, error: LookupError) -> anyhow::Result<()> {
    match error {
        LookupError::Unavailable(_) => {
            print!("{}", render(app));
            Ok(())
        }
        e @ LookupError::NoMatch(_) => Err(e.into()),
    }
}

async fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{prompt} [s/N] ").as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut answer).await?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes"))
}
