//! CLI entry point for tasklane.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tasklane_app::{AppConfig, Controller, FileStore, UiEvent};
use tasklane_core::TaskId;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use view::JsonLinesView;

mod session;
mod view;

/// Single-list task tracker. Every command prints render instructions as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "tasklane", version, about = "tasklane: a single-list task tracker")]
struct Cli {
    /// Working directory holding `.tasklane/` (defaults to current).
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Route fragment to navigate to first, e.g. `#/active`.
    #[arg(long)]
    route: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the list for the current route.
    Show,

    /// Add a task.
    Add { title: String },

    /// Mark a task completed (or open again with `--undo`).
    Toggle {
        id: TaskId,
        #[arg(long)]
        undo: bool,
    },

    /// Mark every task completed (or open again with `--undo`).
    ToggleAll {
        #[arg(long)]
        undo: bool,
    },

    /// Change a task title; an empty title removes the task.
    Rename { id: TaskId, title: String },

    /// Remove a task.
    Remove { id: TaskId },

    /// Remove every completed task.
    ClearCompleted,

    /// Read route fragments and JSON events from stdin, one per line.
    Session,
}

impl Command {
    fn into_event(self) -> Option<UiEvent> {
        match self {
            Self::Show | Self::Session => None,
            Self::Add { title } => Some(UiEvent::NewTodo(title)),
            Self::Toggle { id, undo } => Some(UiEvent::ItemToggle {
                id,
                completed: !undo,
            }),
            Self::ToggleAll { undo } => Some(UiEvent::ToggleAll { completed: !undo }),
            Self::Rename { id, title } => Some(UiEvent::ItemEditDone { id, title }),
            Self::Remove { id } => Some(UiEvent::ItemRemove { id }),
            Self::ClearCompleted => Some(UiEvent::RemoveCompleted),
        }
    }
}

fn main() -> Result<()> {
    let Cli { dir, route, cmd } = Cli::parse();
    install_tracing();

    tokio::runtime::Runtime::new()?.block_on(execute_command(&dir, route, cmd))
}

async fn execute_command(dir: &Path, route: Option<String>, command: Command) -> Result<()> {
    let config = AppConfig::load(dir)?;
    let store = FileStore::open(config.store_path(dir));
    info!(path = %store.path().display(), "opened task file");

    let view = JsonLinesView::new(std::io::stdout());
    let mut controller = Controller::new(store, &view);
    let route = route.unwrap_or_else(|| config.default_route().to_owned());
    controller
        .set_view(&route)
        .await
        .with_context(|| format!("failed to render route {route:?}"))?;

    if matches!(command, Command::Session) {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        return session::run(stdin, &mut controller).await;
    }

    if let Some(event) = command.into_event() {
        let name = event.name();
        controller
            .dispatch(event)
            .await
            .with_context(|| format!("failed to handle {name}"))?;
    }
    Ok(())
}

/// Directives from `RUST_LOG` when present and valid, INFO otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn install_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(directives.as_deref());
    // stdout carries the render stream.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
