use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while expanding `{{ env.VAR }}` placeholders
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Variable is unset and no default was given
    #[error("environment variable not found: `{0}` (line {1})")]
    Missing(String, usize),

    /// Placeholder uses a scope other than `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}` (line {1})")]
    UnsupportedScope(String, usize),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*(?P<key>[a-zA-Z0-9_.]+)\s*(?:\|\s*default\("(?P<default>[^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("fallback") }}` substitutes the fallback when the
/// variable is unset. Comment lines are copied through untouched so a
/// commented-out credential never has to exist in the environment.
pub(crate) fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        lines.push(expand_line(line, index + 1)?);
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str, line_number: usize) -> Result<String, ExpandError> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
        if failure.is_some() {
            return String::new();
        }

        match resolve(caps, line_number) {
            Ok(value) => value,
            Err(e) => {
                failure = Some(e);
                String::new()
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve(caps: &Captures<'_>, line_number: usize) -> Result<String, ExpandError> {
    let key = &caps["key"];
    let default = caps.name("default").map(|m| m.as_str());

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned(), line_number));
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(ExpandError::Missing(var_name.to_owned(), line_number)),
    }
}
