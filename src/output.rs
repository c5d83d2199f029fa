use std::io::{self, Write};

use serde::Serialize;

use crate::app::{GenerateResult, ProgressEvent, ProgressSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_generate(result: &GenerateResult) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}

pub struct TextOutput;

impl TextOutput {
    pub fn print_generate(result: &GenerateResult) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        Self::write_generate(&mut stdout, result)
    }

    /// One `<sample_id>\t<path>` line per script; dry runs also dump the
    /// rendered contents.
    pub fn write_generate<W: Write>(out: &mut W, result: &GenerateResult) -> io::Result<()> {
        for item in &result.items {
            writeln!(out, "{}\t{}", item.sample_id, item.path)?;
            if item.action == "dry-run" {
                out.write_all(item.contents.as_bytes())?;
            }
        }
        Ok(())
    }
}

impl ProgressSink for TextOutput {
    fn event(&self, event: ProgressEvent) {
        tracing::debug!("{}", event.message);
    }
}
