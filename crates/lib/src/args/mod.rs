//! Engine-style command line parsing.
//!
//! Build parameters arrive in the shape the build engine accepts on its own
//! command line: single-dash camelCase flags, each optionally followed by a
//! value (`-buildTarget StandaloneWindows64`, `-development`). Tokens that are
//! neither a flag nor a flag's value are ignored, which covers the invocation
//! path when the raw process arguments are passed in.

use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use crate::consts::{FLAG_MARKER, REDACTED, SECRET_FLAGS};
use crate::report::write_banner;

/// Flag name to value mapping. Keys are unique; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions(BTreeMap<String, String>);

impl ParsedOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, flag: &str) -> Option<&str> {
    self.0.get(flag).map(String::as_str)
  }

  pub fn contains(&self, flag: &str) -> bool {
    self.0.contains_key(flag)
  }

  /// Insert or overwrite `flag`, returning the previous value if any.
  pub fn set(&mut self, flag: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.0.insert(flag.into(), value.into())
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedOptions {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

pub fn is_secret(flag: &str) -> bool {
  SECRET_FLAGS.contains(&flag)
}

/// How a flag's value is echoed: redacted for secrets, quoted otherwise.
pub fn display_value(flag: &str, value: &str) -> String {
  if is_secret(flag) {
    REDACTED.to_string()
  } else {
    format!("\"{}\"", value)
  }
}

fn is_flag(token: &str) -> bool {
  token.starts_with(FLAG_MARKER)
}

fn strip_marker(token: &str) -> &str {
  token.trim_start_matches(FLAG_MARKER)
}

/// Parse engine-style flags into [`ParsedOptions`].
///
/// A token starting with `-` is a flag; its value is the following token unless
/// that token is itself a flag, in which case the value is empty. Every flag
/// found is echoed to `out` as `Found flag "<name>" with value <value>.`, with
/// secret values redacted.
///
/// Only a failing `out` can make this return an error.
pub fn parse_arguments<I, S, W>(args: I, out: &mut W) -> io::Result<ParsedOptions>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
  W: Write,
{
  let args: Vec<S> = args.into_iter().collect();

  write_banner(out, "Parsing settings")?;

  let mut options = ParsedOptions::new();

  for (current, token) in args.iter().enumerate() {
    let token = token.as_ref();
    if !is_flag(token) {
      continue;
    }
    let flag = strip_marker(token);

    let next: Option<&str> = args.get(current + 1).map(|next| next.as_ref());
    let value = match next {
      Some(next) if !is_flag(next) => strip_marker(next),
      _ => "",
    };

    let shown = display_value(flag, value);
    writeln!(out, "Found flag \"{}\" with value {}.", flag, shown)?;
    debug!(flag, value = %shown, "found flag");

    if options.set(flag, value).is_some() {
      debug!(flag, "flag repeated, keeping last value");
    }
  }

  Ok(options)
}
