//! Final verdict of an invocation.
//!
//! Every path through a build ends here: one line describing the outcome, and
//! the exit code the binary terminates with.

use std::io::Write;

use tracing::{error, info, warn};

use crate::consts::exit_codes;
use crate::engine::BuildResult;
use crate::error::CiBuildError;

/// Write the closing line for `result` and return the process exit code.
///
/// Writing is best effort; the exit code is returned even if `out` is gone.
pub fn conclude<W: Write>(result: &Result<(), CiBuildError>, out: &mut W) -> u8 {
  let (line, code) = match result {
    Ok(()) => (BuildResult::Succeeded.message().to_string(), exit_codes::SUCCESS),
    Err(e) => (e.to_string(), e.exit_code()),
  };

  match result {
    Ok(()) => info!(code, "invocation succeeded"),
    Err(e) => error!(code, error = %e, "invocation failed"),
  }

  if let Err(e) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
    warn!(error = %e, "could not write closing line");
  }
  code
}
