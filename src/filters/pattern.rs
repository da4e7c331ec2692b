//! Search patterns used by the replace and match filters

use crate::core::ParamError;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::warn;

/// Literal text or a compiled regular expression
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain substring match
    Simple(String),
    /// Regular expression match
    Regex(Regex),
}

impl Pattern {
    /// Parse a filter pattern
    ///
    /// `/body/flags` is always a regex and must compile. Anything else is
    /// tried as a regex and kept as literal text if it does not compile.
    pub fn parse(pattern: &str) -> Result<Self, ParamError> {
        if let Some((body, flags)) = split_delimited(pattern) {
            let mut builder = RegexBuilder::new(body);
            for flag in flags.chars() {
                match flag {
                    'i' => builder.case_insensitive(true),
                    'm' => builder.multi_line(true),
                    's' => builder.dot_matches_new_line(true),
                    'x' => builder.ignore_whitespace(true),
                    'u' => &mut builder,
                    other => {
                        warn!("Ignoring unsupported regex flag '{}' in {}", other, pattern);
                        &mut builder
                    }
                };
            }
            return builder
                .build()
                .map(Pattern::Regex)
                .map_err(|source| ParamError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                });
        }

        match Regex::new(pattern) {
            Ok(regex) => Ok(Pattern::Regex(regex)),
            Err(_) => Ok(Pattern::Simple(pattern.to_string())),
        }
    }

    /// Check if the pattern matches the given text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Simple(pattern) => text.contains(pattern.as_str()),
            Pattern::Regex(regex) => regex.is_match(text),
        }
    }

    /// Replace every occurrence in the text
    ///
    /// For regex patterns, `$1`, `${1}` and `\1` insert capture groups. Any
    /// other `$` is literal, as it is for simple patterns.
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        match self {
            Pattern::Simple(pattern) if text.contains(pattern.as_str()) => {
                Cow::Owned(text.replace(pattern.as_str(), replacement))
            }
            Pattern::Simple(_) => Cow::Borrowed(text),
            Pattern::Regex(regex) => {
                regex.replace_all(text, group_references(replacement).as_str())
            }
        }
    }
}

/// Rewrite numeric group references into `regex` syntax, escaping other `$`
fn group_references(replacement: &str) -> String {
    let chars: Vec<char> = replacement.chars().collect();
    let mut out = String::with_capacity(replacement.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '$' && chars.get(i + 1) == Some(&'{') {
            let digits = leading_digits(&chars[i + 2..]);
            if !digits.is_empty() && chars.get(i + 2 + digits.len()) == Some(&'}') {
                out.push_str(&format!("${{{}}}", digits));
                i += 3 + digits.len();
                continue;
            }
        } else if c == '$' || c == '\\' {
            let digits = leading_digits(&chars[i + 1..]);
            if !digits.is_empty() {
                out.push_str(&format!("${{{}}}", digits));
                i += 1 + digits.len();
                continue;
            }
        }

        if c == '$' {
            out.push_str("$$");
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

/// Up to two ASCII digits at the start of the slice
fn leading_digits(chars: &[char]) -> String {
    chars
        .iter()
        .take(2)
        .take_while(|c| c.is_ascii_digit())
        .collect()
}

/// Split `/body/flags` into body and flags
fn split_delimited(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let flags = &rest[close + 1..];
    if !flags.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((&rest[..close], flags))
}
