//! Last-name pattern matching for owner lookup.
//!
//! # Responsibility
//! - Parse LIKE-style patterns (`%` any run, `_` one char, `\` escape).
//! - Match owner last names by containment.
//!
//! # Invariants
//! - Matching is containment: leading and trailing `%` never change results.
//! - An empty pattern matches every last name.
//! - Patterns without wildcards never compile a regex.

use crate::config::LastNameMatch;
use regex::{Regex, RegexBuilder};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Compilation failure for a wildcard pattern.
#[derive(Debug)]
pub struct LastNamePatternError {
    pattern: String,
    source: regex::Error,
}

impl Display for LastNamePatternError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid last-name pattern `{}`: {}", self.pattern, self.source)
    }
}

impl Error for LastNamePatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyRun,
    AnyOne,
}

#[derive(Debug)]
enum Matcher {
    Everything,
    Substring { needle: String, ignore_case: bool },
    Wildcard(Regex),
}

/// Compiled last-name search pattern.
#[derive(Debug)]
pub struct LastNamePattern {
    matcher: Matcher,
}

impl LastNamePattern {
    /// Parses `pattern` for the given case policy.
    ///
    /// # Errors
    /// - Returns an error when the translated regex exceeds engine limits.
    pub fn parse(pattern: &str, mode: LastNameMatch) -> Result<Self, LastNamePatternError> {
        let ignore_case = mode == LastNameMatch::CaseInsensitive;
        let tokens = trim_outer_runs(tokenize(pattern));

        if tokens.is_empty() {
            return Ok(Self {
                matcher: Matcher::Everything,
            });
        }

        if let Some(literal) = literal_text(&tokens) {
            let needle = if ignore_case {
                literal.to_lowercase()
            } else {
                literal
            };
            return Ok(Self {
                matcher: Matcher::Substring {
                    needle,
                    ignore_case,
                },
            });
        }

        let regex = RegexBuilder::new(&to_regex_source(&tokens))
            .case_insensitive(ignore_case)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| LastNamePatternError {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            matcher: Matcher::Wildcard(regex),
        })
    }

    /// Returns whether `last_name` contains a match for this pattern.
    pub fn matches(&self, last_name: &str) -> bool {
        match &self.matcher {
            Matcher::Everything => true,
            Matcher::Substring {
                needle,
                ignore_case: false,
            } => last_name.contains(needle.as_str()),
            Matcher::Substring {
                needle,
                ignore_case: true,
            } => last_name.to_lowercase().contains(needle.as_str()),
            Matcher::Wildcard(regex) => regex.is_match(last_name),
        }
    }

    /// Returns whether this pattern accepts every last name.
    pub fn is_match_all(&self) -> bool {
        matches!(self.matcher, Matcher::Everything)
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        let token = match c {
            '%' => Token::AnyRun,
            '_' => Token::AnyOne,
            // A trailing backslash has nothing to escape and stays literal.
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        };
        tokens.push(token);
    }

    tokens
}

fn trim_outer_runs(tokens: Vec<Token>) -> Vec<Token> {
    let start = tokens
        .iter()
        .position(|token| *token != Token::AnyRun)
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|token| *token != Token::AnyRun)
        .map_or(start, |index| index + 1);
    tokens[start..end].to_vec()
}

fn literal_text(tokens: &[Token]) -> Option<String> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(c) => Some(*c),
            Token::AnyRun | Token::AnyOne => None,
        })
        .collect()
}

fn to_regex_source(tokens: &[Token]) -> String {
    let mut source = String::with_capacity(tokens.len() * 2);
    let mut buf = [0_u8; 4];

    for token in tokens {
        match token {
            Token::Literal(c) => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
            Token::AnyRun => source.push_str(".*"),
            Token::AnyOne => source.push('.'),
        }
    }

    source
}

#[cfg(test)]
mod tests {
    use super::LastNamePattern;
    use crate::config::LastNameMatch;

    fn sensitive(pattern: &str) -> LastNamePattern {
        LastNamePattern::parse(pattern, LastNameMatch::CaseSensitive).unwrap()
    }

    #[test]
    fn empty_and_percent_only_patterns_match_everything() {
        assert!(sensitive("").is_match_all());
        assert!(sensitive("%%").is_match_all());
        assert!(sensitive("").matches(""));
    }

    #[test]
    fn plain_pattern_is_case_sensitive_containment() {
        let pattern = sensitive("Smith");
        assert!(pattern.matches("Smith"));
        assert!(pattern.matches("Goldsmith-Smithers"));
        assert!(!pattern.matches("smith"));
        assert!(!pattern.is_match_all());
    }

    #[test]
    fn outer_percent_markers_do_not_change_results() {
        let wrapped = sensitive("%Frank%");
        let bare = sensitive("Frank");
        for name in ["Franklin", "McFrank", "frank", "Davis"] {
            assert_eq!(wrapped.matches(name), bare.matches(name), "{name}");
        }
    }

    #[test]
    fn case_insensitive_mode_folds_both_sides() {
        let pattern = LastNamePattern::parse("DAV", LastNameMatch::CaseInsensitive).unwrap();
        assert!(pattern.matches("Davis"));
        assert!(pattern.matches("McDavid"));
        assert!(!pattern.matches("Black"));
    }

    #[test]
    fn interior_wildcards_compile_to_regex() {
        let pattern = sensitive("Sm_th");
        assert!(pattern.matches("Smith"));
        assert!(pattern.matches("Smyth"));
        assert!(!pattern.matches("Smth"));

        let spanning = sensitive("F%lin");
        assert!(spanning.matches("Franklin"));
        assert!(!spanning.matches("Frank"));
    }

    #[test]
    fn escaped_wildcards_and_regex_metacharacters_are_literal() {
        let pattern = sensitive(r"O\_Hara");
        assert!(pattern.matches("O_Hara"));
        assert!(!pattern.matches("OxHara"));

        let dotted = sensitive("St. %");
        assert!(dotted.matches("St. John"));
        assert!(!dotted.matches("Stx John"));
    }
}
