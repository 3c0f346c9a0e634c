//! Positional placeholder handling.
//!
//! TS message text carries `%1`, `%2`, … substitution tokens and `%%` as the
//! escape for a literal percent sign. The consuming formatter substitutes by
//! position, so a translation must keep every `%N` from its source, in the
//! same relative order. Tokens are scanned left-to-right: `%1%%` is the
//! placeholder `%1` followed by one escaped percent.

use regex::Regex;
use std::sync::OnceLock;

/// A single token found in message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `%N` with N in 1..=99
    Positional(u8),

    /// `%%`, rendered as a literal `%`
    Escaped,
}

// Qt accepts %1 through %99; longer digit runs bind the first two digits.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"%(?:[1-9][0-9]?|%)").unwrap())
}

/// Extract all placeholder tokens from `text` in order of appearance.
pub fn extract(text: &str) -> Vec<Placeholder> {
    token_regex()
        .find_iter(text)
        .map(|m| match &text[m.start() + 1..m.end()] {
            "%" => Placeholder::Escaped,
            digits => Placeholder::Positional(digits.parse().unwrap_or(0)),
        })
        .collect()
}

/// Extract only the positional tokens, preserving order.
pub fn positional(text: &str) -> Vec<u8> {
    extract(text)
        .into_iter()
        .filter_map(|p| match p {
            Placeholder::Positional(n) => Some(n),
            Placeholder::Escaped => None,
        })
        .collect()
}

/// Count of `%%` escapes in `text`.
pub fn escape_count(text: &str) -> usize {
    extract(text)
        .iter()
        .filter(|p| matches!(p, Placeholder::Escaped))
        .count()
}

/// Substitute placeholders positionally: `%N` becomes `args[N-1]`, `%%`
/// becomes `%`. A `%N` without a matching argument is left verbatim;
/// validation has already flagged count mismatches by the time text is
/// rendered.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for m in token_regex().find_iter(template) {
        out.push_str(&template[last..m.start()]);
        let token = m.as_str();
        if token == "%%" {
            out.push('%');
        } else {
            match token[1..].parse::<usize>() {
                Ok(n) if n >= 1 && n <= args.len() => out.push_str(args[n - 1]),
                _ => out.push_str(token),
            }
        }
        last = m.end();
    }

    out.push_str(&template[last..]);
    out
}
