//! The ordered substitution rules applied by the formatter.
//!
//! All patterns are compiled once, on first use, through `once_cell::sync::Lazy`.
//! Rules that need lookbehind or lookahead go through `fancy-regex`; the rest use
//! the `regex` crate directly.

use crate::error::{FormatError, Result};
use once_cell::sync::Lazy;
use std::ops::Range;

/// Operators recognised by the spacing rules. Alternatives are tried in order,
/// so the two-character forms win over a lone `=`.
const OPERATORS: &str = r"(\+|-|\*|/|==|!=|=)";

/// Any character outside the ECMAScript whitespace set. Unlike `\S`, this
/// treats U+FEFF (BOM) as whitespace and U+0085 (NEL) as a regular character.
const NON_SPACE: &str = concat!(
    "[^\t\n\u{0B}\u{0C}\r \u{A0}\u{1680}\u{2000}-\u{200A}",
    "\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]"
);

/// A compiled pattern on either engine.
#[derive(Debug)]
pub enum Pattern {
    Plain(regex::Regex),
    Lookaround(fancy_regex::Regex),
}

/// What a match is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Keep capture group 1, padded with the given text on each side.
    Wrap { before: &'static str, after: &'static str },
    /// Replace the whole match with fixed text.
    Literal(&'static str),
}

#[derive(Debug)]
pub struct SpacingRule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub replacement: Replacement,
}

/// One match: the span of the whole match and the span of group 1
/// (or the whole match again when the pattern has no group).
struct Hit {
    whole: Range<usize>,
    group: Range<usize>,
}

pub static RULES: Lazy<Vec<SpacingRule>> = Lazy::new(|| {
    vec![
        SpacingRule {
            name: "operator-spacing",
            pattern: lookaround(&format!("(?<={NON_SPACE}){OPERATORS}(?={NON_SPACE})")),
            replacement: Replacement::Wrap { before: " ", after: " " },
        },
        SpacingRule {
            name: "operator-leading-space",
            pattern: lookaround(&format!("(?<={NON_SPACE}){OPERATORS}(?={NON_SPACE})")),
            replacement: Replacement::Wrap { before: " ", after: "" },
        },
        SpacingRule {
            name: "comma-spacing",
            pattern: lookaround(r",( )+(?!\n)"),
            replacement: Replacement::Literal(", "),
        },
        SpacingRule {
            name: "comma-line-end",
            pattern: plain(r",( )+\n"),
            replacement: Replacement::Literal(",\n"),
        },
        SpacingRule {
            name: "double-equals-repair",
            pattern: plain(r"=( )+="),
            replacement: Replacement::Literal("=="),
        },
    ]
});

/// # Panics
///
/// Panics on an invalid pattern. Every pattern here is a constant covered by
/// `rules_compile`, so this can only fire on first access after a bad edit.
fn plain(pattern: &str) -> Pattern {
    Pattern::Plain(
        regex::Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid regex pattern {pattern}: {e}")),
    )
}

/// # Panics
///
/// Same contract as [`plain`].
fn lookaround(pattern: &str) -> Pattern {
    Pattern::Lookaround(
        fancy_regex::Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid regex pattern {pattern}: {e}")),
    )
}

impl SpacingRule {
    /// Apply this rule to every non-overlapping match, scanning left to right.
    ///
    /// Lookarounds see `text` as it was before the rule ran, not the partially
    /// rewritten output.
    pub fn apply(&self, text: &str) -> Result<String> {
        let hits = self.hits(text)?;
        if hits.is_empty() {
            return Ok(text.to_string());
        }

        let mut out = String::with_capacity(text.len() + hits.len() * 2);
        let mut last = 0;
        for hit in hits {
            out.push_str(&text[last..hit.whole.start]);
            match self.replacement {
                Replacement::Wrap { before, after } => {
                    out.push_str(before);
                    out.push_str(&text[hit.group]);
                    out.push_str(after);
                }
                Replacement::Literal(literal) => out.push_str(literal),
            }
            last = hit.whole.end;
        }
        out.push_str(&text[last..]);
        Ok(out)
    }

    fn hits(&self, text: &str) -> Result<Vec<Hit>> {
        match &self.pattern {
            Pattern::Plain(re) => Ok(re
                .captures_iter(text)
                .filter_map(|caps| {
                    Hit::new(
                        caps.get(0).map(|m| m.start()..m.end()),
                        caps.get(1).map(|m| m.start()..m.end()),
                    )
                })
                .collect()),
            Pattern::Lookaround(re) => {
                let mut hits = Vec::new();
                for caps in re.captures_iter(text) {
                    let caps =
                        caps.map_err(|source| FormatError::Pattern { rule: self.name, source })?;
                    hits.extend(Hit::new(
                        caps.get(0).map(|m| m.start()..m.end()),
                        caps.get(1).map(|m| m.start()..m.end()),
                    ));
                }
                Ok(hits)
            }
        }
    }
}

impl Hit {
    fn new(whole: Option<Range<usize>>, group: Option<Range<usize>>) -> Option<Self> {
        let whole = whole?;
        let group = group.unwrap_or_else(|| whole.clone());
        Some(Self { whole, group })
    }
}
