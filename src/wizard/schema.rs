//! Declarative per-field validation rules.
//!
//! Each field carries a static rule list evaluated independently; validation
//! returns a map from failing field to a human-readable message. The same
//! rule set serves both per-step checks and the full-aggregate check before
//! submission.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Field;

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain at least one non-whitespace character
    NonEmpty,
    /// Value must look like an email address
    Email,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local@domain.tld with no whitespace; intentionally permissive
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Rules for a field. Boolean preferences carry no rules.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Email => &[Rule::NonEmpty, Rule::Email],
        Field::Newsletter | Field::Alerts => &[],
        _ => &[Rule::NonEmpty],
    }
}

/// Evaluate a single rule against a value, returning a message on failure
fn apply(rule: Rule, field: Field, value: &str) -> Option<String> {
    match rule {
        Rule::NonEmpty => {
            if value.trim().is_empty() {
                Some(format!("{} is required", field.label()))
            } else {
                None
            }
        }
        Rule::Email => {
            if value.trim().is_empty() || EMAIL_RE.is_match(value.trim()) {
                // emptiness is NonEmpty's complaint, not Email's
                None
            } else {
                Some("Enter a valid email address".to_string())
            }
        }
    }
}

/// First failing rule's message for a field, if any
pub fn check(field: Field, value: &str) -> Option<String> {
    rules_for(field)
        .iter()
        .find_map(|rule| apply(*rule, field, value))
}

/// Validate a set of fields, reading each value through `value_of`.
///
/// Returns a map containing an entry for every failing field and nothing
/// else; fields outside `fields` are never touched.
pub fn validate<F>(fields: &[Field], value_of: F) -> BTreeMap<Field, String>
where
    F: Fn(Field) -> String,
{
    let mut failures = BTreeMap::new();
    for field in fields {
        if let Some(message) = check(*field, &value_of(*field)) {
            failures.insert(*field, message);
        }
    }
    failures
}
