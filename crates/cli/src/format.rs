//! Output formatting for resolved parameters.
//!
//! | Format | Single key | Path |
//! |--------|-----------|------|
//! | bash | `export BASE="value"` | `export REL="value"` per key |
//! | json | `{"result": {...}}` | `{"result": [...]}` |
//! | text | `"name"="value"` | one line per key |
//!
//! For bash, `BASE` is the key's last path segment and `REL` is the key with
//! the requested prefix removed; characters not allowed in shell variable
//! names become `_`.

use std::fmt::Display;

use psclient::{OutputFormat, Parameter, ParameterSet};
use serde::Serialize;

#[derive(Serialize)]
struct ResultEnvelope<'a, T: Serialize> {
    result: &'a T,
}

#[derive(Serialize)]
struct VersionEnvelope<'a> {
    version: &'a str,
}

/// Format a single resolved key.
pub fn format_parameter(param: &Parameter, format: OutputFormat) -> String {
    match format {
        OutputFormat::Bash => export_line(param.base_name(), &param.value),
        OutputFormat::Json => to_json(&ResultEnvelope { result: param }),
        OutputFormat::Text => text_line(param),
    }
}

/// Format the result of a path query for `prefix`.
pub fn format_parameter_set(set: &ParameterSet, prefix: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Bash => set
            .iter()
            .map(|p| export_line(&p.name.replacen(prefix, "", 1), &p.value))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(&ResultEnvelope { result: set }),
        OutputFormat::Text => set.iter().map(text_line).collect::<Vec<_>>().join("\n"),
    }
}

/// Format the program version string.
pub fn format_version(version: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Bash => format!("echo \"{}\"", escape_double_quoted(version)),
        OutputFormat::Json => to_json(&VersionEnvelope { version }),
        OutputFormat::Text => version.to_string(),
    }
}

/// Format an error as a JSON document.
pub fn format_error_json(err: &dyn Display) -> String {
    format!("{{\"error\":{}}}", serde_json::Value::from(err.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format_error_json(&e))
}

fn text_line(param: &Parameter) -> String {
    format!("\"{}\"=\"{}\"", param.name, param.value)
}

fn export_line(name: &str, value: &str) -> String {
    format!(
        "export {}=\"{}\"",
        shell_identifier(name),
        escape_double_quoted(value)
    )
}

/// Map a key fragment to a valid shell variable name.
fn shell_identifier(name: &str) -> String {
    let mut ident: String = name
        .trim_matches('/')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Escape characters that are special inside a double-quoted shell string.
fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
