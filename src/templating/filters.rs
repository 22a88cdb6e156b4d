//! Casing filters for the container templates.
//!
//! Every dependency name produces three identifiers in the generated code:
//!
//! | Identifier | Derivation | `value` becomes |
//! |------------|------------|-----------------|
//! | private field | [`lower_first`] | `value` |
//! | accessor method | [`upper_first`] | `Value` |
//! | create method | `New` + [`upper_first`] | `NewValue` |
//!
//! The same functions are registered with Tera as the `ucfirst` and `lcfirst`
//! filters, so the templates and [`Dependency`](crate::generator::Dependency)
//! always agree on derived names.
//!
//! # Unicode
//!
//! Only the first Unicode scalar value is changed; the rest of the string is
//! copied untouched. A leading character is replaced only when its case
//! mapping is itself a single character. Characters whose mapping expands
//! (`ß` upper-cases to `SS`, `İ` lower-cases to `i` plus a combining dot) are
//! kept as they are, so every derived identifier has the same number of
//! characters as the dependency name.
//!
//! # Empty input
//!
//! An empty identifier has no first letter. The plain functions return `None`
//! and the Tera filters fail, which aborts the render.

use std::collections::HashMap;

/// Name of the upper-casing filter as used in templates.
pub const UCFIRST: &str = "ucfirst";

/// Name of the lower-casing filter as used in templates.
pub const LCFIRST: &str = "lcfirst";

/// Error message produced by both filters for an empty string.
pub const EMPTY_IDENTIFIER_MESSAGE: &str = "cannot change the case of an empty identifier";

/// Upper-case the first character of `s`, leaving the remainder unchanged.
///
/// Returns `None` when `s` is empty.
///
/// # Examples
///
/// ```rust
/// use godic_gen::templating::filters::upper_first;
///
/// assert_eq!(upper_first("alpha").as_deref(), Some("Alpha"));
/// assert_eq!(upper_first("émile").as_deref(), Some("Émile"));
/// assert_eq!(upper_first(""), None);
/// ```
#[must_use]
pub fn upper_first(s: &str) -> Option<String> {
    replace_first(s, |c| single_char(c.to_uppercase()))
}

/// Lower-case the first character of `s`, leaving the remainder unchanged.
///
/// Returns `None` when `s` is empty.
///
/// # Examples
///
/// ```rust
/// use godic_gen::templating::filters::lower_first;
///
/// assert_eq!(lower_first("ConfigOption").as_deref(), Some("configOption"));
/// assert_eq!(lower_first(""), None);
/// ```
#[must_use]
pub fn lower_first(s: &str) -> Option<String> {
    replace_first(s, |c| single_char(c.to_lowercase()))
}

fn replace_first(s: &str, map: impl Fn(char) -> Option<char>) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let mut out = String::with_capacity(s.len());
    out.push(map(first).unwrap_or(first));
    out.extend(chars);
    Some(out)
}

/// The mapped character, or `None` if the mapping is not exactly one character.
fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Build a Tera filter that applies `transform` to a string value.
fn casing_filter(
    name: &'static str,
    transform: fn(&str) -> Option<String>,
) -> impl tera::Filter + 'static {
    move |value: &tera::Value, _args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
        let input = value
            .as_str()
            .ok_or_else(|| tera::Error::msg(format!("{name} filter requires a string")))?;

        let output = transform(input).ok_or_else(|| tera::Error::msg(EMPTY_IDENTIFIER_MESSAGE))?;

        Ok(tera::Value::String(output))
    }
}

/// Create the `ucfirst` Tera filter.
pub fn create_ucfirst_filter() -> impl tera::Filter + 'static {
    casing_filter(UCFIRST, upper_first)
}

/// Create the `lcfirst` Tera filter.
pub fn create_lcfirst_filter() -> impl tera::Filter + 'static {
    casing_filter(LCFIRST, lower_first)
}
