//! Line-oriented driver: route fragments and JSON events read from an async reader.

use anyhow::Result;
use tasklane_app::{Controller, TaskStore, TaskView, UiEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Route(String),
    Event(UiEvent),
}

fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Input::Route(line.to_owned()));
    }
    Ok(Input::Event(serde_json::from_str(line)?))
}

/// Feed every line of `input` to the controller until end of input.
///
/// Unparseable lines are logged and skipped; store failures end the session.
pub async fn run<R, S, V>(input: R, controller: &mut Controller<S, V>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: TaskStore,
    V: TaskView,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Input::Route(route)) => controller.set_view(&route).await?,
            Ok(Input::Event(event)) => controller.dispatch(event).await?,
            Err(err) => warn!("skipping unreadable line {line:?}: {err}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::JsonLinesView;
    use tasklane_app::MemoryStore;
    use tasklane_core::{Task, TaskId, TaskQuery};

    #[test]
    fn classifies_lines() -> Result<()> {
        assert_eq!(parse_line("")?, Input::Route(String::new()));
        assert_eq!(parse_line("  #/active ")?, Input::Route("#/active".into()));
        assert_eq!(
            parse_line(r#"{"event":"newTodo","payload":"milk"}"#)?,
            Input::Event(UiEvent::NewTodo("milk".into()))
        );
        assert!(parse_line("{broken").is_err());
        Ok(())
    }

    #[tokio::test]
    async fn drives_controller_from_lines() -> Result<()> {
        let id = TaskId::from_u128(21);
        let store = MemoryStore::with_tasks(vec![Task::new(id, "my todo")]);
        let view = JsonLinesView::new(Vec::new());
        let script = format!(
            "#/\nnot json\n{{\"event\":\"itemToggle\",\"payload\":{{\"id\":\"{id}\",\"completed\":true}}}}\n#/completed\n"
        );

        {
            let mut controller = Controller::new(store.clone(), &view);
            run(script.as_bytes(), &mut controller).await?;
        }

        let output = String::from_utf8(view.into_inner())?;
        assert!(output.contains(r#"{"instruction":"elementComplete","payload":{"id":"00000000-0000-0000-0000-000000000015","completed":true}}"#));
        assert!(output.lines().last().is_some_and(|line| line == r#"{"instruction":"setFilter","payload":"completed"}"#));
        assert_eq!(store.read(TaskQuery::completed(true)).await?.len(), 1);
        Ok(())
    }
}
