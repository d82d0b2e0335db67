//! The `${...}` variable-expansion engine.
//!
//! Stored translation values may embed `${name}` variables. On lookup they
//! are rewritten to fixed point: the first occurrence is replaced with its
//! resolution and the result re-scanned until no variable remains.
//!
//! Resolution precedence, first match wins:
//!
//! 1. custom expanders from the [`ExpanderRegistry`]
//! 2. built-ins: `date`, `time`, `lib`, `os`, `liburl`
//! 3. cross-references: `${section:field}` resolves to that field's fully
//!    expanded value; a bare `${name}` resolves against the section the
//!    looked-up field lives in
//! 4. otherwise the variable expands to the empty string
//!
//! Self- or mutually-referencing variables would rewrite forever, so both
//! the replacement loop and cross-reference recursion are capped at
//! [`MAX_EXPANSION_ROUNDS`]; hitting the cap fails the single lookup with
//! [`Error::CyclicExpansion`] without touching the stored value.

use chrono::Local;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::registry::ExpanderRegistry;
use crate::scanner::VARIABLE_REGEX;

/// Upper bound on replacement rounds per value and on cross-reference
/// recursion depth.
pub const MAX_EXPANSION_ROUNDS: usize = 32;

/// Returns the name of the first `${...}` variable in `value`, stripped of
/// its `${` / `}` delimiters.
pub fn contains_variable(value: &str) -> Option<&str> {
    VARIABLE_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}

/// Rewrites `value` until no `${...}` variable remains.
///
/// Standalone values have no home section, so bare names only hit the
/// registry and the built-ins here; field lookups through
/// [`Document::field`](crate::document::Document::field) also resolve bare
/// names against their own section.
pub fn expand(document: &Document, registry: &ExpanderRegistry, value: &str) -> Result<String> {
    expand_at(document, registry, None, value, 0)
}

pub(crate) fn expand_at(
    document: &Document,
    registry: &ExpanderRegistry,
    section: Option<&str>,
    value: &str,
    depth: usize,
) -> Result<String> {
    let mut expanded = value.to_string();
    let mut rounds = 0;

    loop {
        let Some((range, name)) = VARIABLE_REGEX
            .captures(&expanded)
            .and_then(|caps| caps.get(0).zip(caps.get(1)))
            .map(|(whole, name)| (whole.range(), name.as_str().to_string()))
        else {
            break;
        };

        if rounds >= MAX_EXPANSION_ROUNDS {
            return Err(Error::CyclicExpansion { variable: name });
        }

        let replacement = resolve_variable(document, registry, section, &name, depth)?;
        expanded.replace_range(range, &replacement);
        rounds += 1;
    }

    Ok(expanded)
}

fn resolve_variable(
    document: &Document,
    registry: &ExpanderRegistry,
    section: Option<&str>,
    name: &str,
    depth: usize,
) -> Result<String> {
    if depth >= MAX_EXPANSION_ROUNDS {
        return Err(Error::CyclicExpansion {
            variable: name.to_string(),
        });
    }

    if let Some(value) = registry.resolve(name) {
        return Ok(value);
    }

    if let Some(value) = resolve_builtin(name) {
        return Ok(value);
    }

    // Cross-reference: the referenced translation is itself expanded before
    // substitution. A missing target resolves to the empty string.
    if let Some((target_section, field)) = name.split_once(':') {
        let resolved = document.field_at(registry, target_section, field, depth + 1)?;
        return Ok(resolved.unwrap_or_default());
    }

    // A bare name can still refer to a sibling field in the section the
    // value came from.
    if let Some(current) = section
        && document.raw_field(current, name).is_some()
    {
        let resolved = document.field_at(registry, current, name, depth + 1)?;
        return Ok(resolved.unwrap_or_default());
    }

    // Unknown variables expand to nothing; the format is best-effort.
    Ok(String::new())
}

/// Built-in default expanders, evaluated fresh on every call.
fn resolve_builtin(name: &str) -> Option<String> {
    match name {
        "date" => Some(Local::now().format("%Y-%m-%d").to_string()),
        "time" => Some(Local::now().format("%H:%M:%S").to_string()),
        "lib" => Some(format!(
            "{} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )),
        "os" => Some(std::env::consts::OS.to_string()),
        "liburl" => Some(env!("CARGO_PKG_REPOSITORY").to_string()),
        _ => None,
    }
}
