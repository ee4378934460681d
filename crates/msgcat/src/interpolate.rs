//! Placeholder substitution for resolved format strings.
//!
//! Two placeholder styles exist, matching the catalogs this runtime
//! consumes: positional `%s` and named `%(key)s`. Interpolation is the
//! only fallible operation in the crate; an argument mismatch is a
//! caller error and propagates as [`InterpolateError`].

use std::collections::{HashMap, VecDeque};

use crate::error::InterpolateError;
use crate::types::Value;

/// Substitute each `%s` in `format` with the next value from the front
/// of `args`.
///
/// The queue is consumed destructively, front to back; values left after
/// the last placeholder stay queued. Callers sharing a queue across
/// calls get draining semantics, not reuse.
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use msgcat::{interpolate, Value};
///
/// let mut args: VecDeque<Value> = [3.into(), 10.into()].into();
/// let text = interpolate("%s of %s", &mut args).unwrap();
/// assert_eq!(text, "3 of 10");
/// assert!(args.is_empty());
/// ```
pub fn interpolate(format: &str, args: &mut VecDeque<Value>) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    let mut placeholder = 0;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        let value = args
            .pop_front()
            .ok_or(InterpolateError::MissingArgument { placeholder })?;
        out.push_str(&value.to_string());
        placeholder += 1;
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Substitute each `%(key)s` in `format` with the value stored under
/// `key` in `args`.
///
/// Malformed placeholders (`%(` without a matching `)s`, or a key with
/// non-word characters) pass through as literal text.
///
/// # Example
///
/// ```
/// use msgcat::{args, interpolate_named};
///
/// let args = args! { "sel" => 3, "cnt" => 10 };
/// let text = interpolate_named("%(sel)s of %(cnt)s selected", &args).unwrap();
/// assert_eq!(text, "3 of 10 selected");
/// ```
pub fn interpolate_named(
    format: &str,
    args: &HashMap<String, Value>,
) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    while let Some(pos) = rest.find("%(") {
        let after = &rest[pos + 2..];
        match placeholder_key(after) {
            Some(key) => {
                out.push_str(&rest[..pos]);
                let value = args.get(key).ok_or_else(|| InterpolateError::UnknownKey {
                    key: key.to_string(),
                })?;
                out.push_str(&value.to_string());
                rest = &after[key.len() + 2..];
            }
            None => {
                out.push_str(&rest[..pos + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Match the `key)s` tail of a named placeholder, returning the key.
fn placeholder_key(input: &str) -> Option<&str> {
    let end = input.find(')')?;
    let key = &input[..end];
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    input[end + 1..].starts_with('s').then_some(key)
}
