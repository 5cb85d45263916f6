use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tasklane_app::{Render, TaskView};
use tracing::warn;

/// View that prints every render instruction as one JSON object per line.
pub struct JsonLinesView<W> {
    out: Mutex<W>,
}

impl<W: Write> JsonLinesView<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, instruction: &Render) -> anyhow::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *out, instruction)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> TaskView for JsonLinesView<W> {
    fn render(&self, instruction: Render) {
        if let Err(err) = self.write_line(&instruction) {
            warn!(instruction = instruction.name(), "failed to write render: {err:#}");
        }
    }
}
