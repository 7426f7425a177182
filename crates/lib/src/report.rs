//! Diagnostic output blocks.

use std::io::{self, Write};
use std::time::Duration;

use crate::engine::BuildSummary;

const RULE: &str = "###########################";

/// Write a boxed section heading framed by blank lines.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", RULE)?;
  writeln!(out, "#{:^25}#", title)?;
  writeln!(out, "{}", RULE)?;
  writeln!(out)
}

/// Human-readable duration with sub-second precision kept to milliseconds.
pub fn format_duration(duration: Duration) -> String {
  let millis = Duration::new(duration.as_secs(), duration.subsec_millis() * 1_000_000);
  humantime::format_duration(millis).to_string()
}

/// Write the `Build results` block for one build.
pub fn write_summary<W: Write>(out: &mut W, summary: &BuildSummary) -> io::Result<()> {
  write_banner(out, "Build results")?;
  writeln!(out, "Duration: {}", format_duration(summary.total_time))?;
  writeln!(out, "Warnings: {}", summary.total_warnings)?;
  writeln!(out, "Errors: {}", summary.total_errors)?;
  writeln!(out, "Size: {} bytes", summary.total_size)?;
  writeln!(out)
}
