use anyhow::Context;
use skldx_core::domain::{SklError, SklResult};
use skldx_core::dx::ConversionSummary;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Shared append-only command history in the working directory, one line per
/// invocation, matching the legacy converter's habit.
pub(super) const HISTORY_FILE: &str = "skl2dx.hist";

pub(super) fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub(super) fn append_history_line(program_name: &str, args: &[String]) -> anyhow::Result<()> {
    let mut line = String::from(program_name);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(HISTORY_FILE)
        .with_context(|| format!("failed to open history file '{}'", HISTORY_FILE))?;
    writeln!(file, "{}", line)
        .with_context(|| format!("failed to append to history file '{}'", HISTORY_FILE))?;
    Ok(())
}

pub(super) fn write_report(path: &Path, summary: &ConversionSummary) -> SklResult<()> {
    let json = summary.to_json_string()?;
    std::fs::write(path, json + "\n").map_err(|source| {
        SklError::io_system(
            "IO.REPORT_WRITE",
            format!("failed to write report '{}': {}", path.display(), source),
        )
    })
}
