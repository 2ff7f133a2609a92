//! Terminal front-end for the todo service.
//!
//! Every invocation loads the list, performs at most one action, and prints
//! the resulting view. A failed request is shown in the view and makes the
//! process exit non-zero.

mod render;

use clap::{Parser, Subcommand};
use todo_core::{TodoApp, TodoClient, UreqTransport};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::render::render;

#[derive(Debug, Parser)]
#[command(name = "todo-cli", about = "List and edit todos on a todo server")]
struct Cli {
    /// Base URL of the API; `/todos` is appended.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:5000/api")]
    api_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every todo (the default).
    List,
    /// Add a todo; the words are joined with spaces.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Flip a todo between done and not done.
    Toggle { id: Uuid },
    /// Remove a todo.
    Delete { id: Uuid },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = TodoApp::new(TodoClient::new(&cli.api_url), UreqTransport::new());

    let outcome = app.load().and_then(|()| match cli.command.unwrap_or(Command::List) {
        Command::List => Ok(()),
        Command::Add { text } => {
            app.set_input(text.join(" "));
            app.submit()
        }
        Command::Toggle { id } => app.toggle(id),
        Command::Delete { id } => app.delete(id),
    });

    print!("{}", render(&app.state().view()));
    outcome?;
    Ok(())
}
