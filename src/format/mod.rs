//! Operator and comma spacing.
//!
//! The formatter is purely textual: it has no notion of strings, comments or
//! literals, so `"a+b"` inside a string literal is rewritten like code.

pub mod rules;

pub use rules::{Pattern, Replacement, SpacingRule, RULES};

use crate::error::Result;
use tracing::debug;

/// Run every rule in order, each on the output of the previous one.
///
/// Both operator passes are applied even though the second rarely matches;
/// dropping either changes the output for inputs like `a=-b` or `x ==y`.
pub fn format_source(text: &str) -> Result<String> {
    let mut current = text.to_string();
    for rule in RULES.iter() {
        let next = rule.apply(&current)?;
        if next != current {
            debug!(rule = rule.name, "rule rewrote text");
        }
        current = next;
    }
    Ok(current)
}
