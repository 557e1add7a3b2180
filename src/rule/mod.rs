//! Public Suffix List rules.
//!
//! See <https://publicsuffix.org> for the rule semantics.

mod precedence;

pub(crate) use precedence::prevailing;

use std::fmt;

use crate::error::{PslError, Result};
use crate::labels;

/// Marker prefixing an exception rule pattern.
pub const EXCEPTION_TOKEN: char = '!';

/// The wildcard label, matching any single domain label.
pub const WILDCARD: &str = "*";

/// A single Public Suffix List rule.
///
/// A rule is an ordered sequence of labels plus an exception flag. The
/// exception marker is stripped at construction and is never part of the
/// pattern itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pattern: String,
    /// Pattern labels, lower-cased, rightmost (TLD) first.
    reversed_labels: Vec<String>,
    exception: bool,
}

impl Rule {
    /// Create a rule from a pattern as specified by the Public Suffix List.
    ///
    /// A leading `!` marks an exception rule and is stripped. Fails with
    /// [`PslError::EmptyPattern`] if nothing remains after stripping.
    pub fn new(pattern: &str) -> Result<Self> {
        let (exception, pattern) = match pattern.strip_prefix(EXCEPTION_TOKEN) {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        if labels::is_blank(pattern) {
            return Err(PslError::EmptyPattern);
        }

        let reversed_labels = labels::reversed_labels(pattern)
            .into_iter()
            .map(|label| label.to_lowercase())
            .collect();

        Ok(Self {
            pattern: pattern.to_string(),
            reversed_labels,
            exception,
        })
    }

    /// The rule pattern, without the exception token.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether this is an exception rule.
    ///
    /// Exception rules are always prevailing rules.
    pub fn is_exception(&self) -> bool {
        self.exception
    }

    /// Number of labels in the pattern.
    pub fn size(&self) -> usize {
        self.reversed_labels.len()
    }

    /// Pattern labels, lower-cased, rightmost (TLD) first. This is the
    /// rule's path through the registry trie.
    pub(crate) fn reversed_labels(&self) -> &[String] {
        &self.reversed_labels
    }

    /// Return the public suffix of `domain` matched by this rule.
    ///
    /// Labels are compared rightmost-first and case-insensitively; a
    /// wildcard rule label consumes any single domain label. The returned
    /// suffix is spelled with the domain's own labels. For an exception
    /// rule, the leftmost matched label is dropped: `!test.ck` matching
    /// `test.ck` yields `ck`.
    pub fn match_suffix(&self, domain: &str) -> Option<String> {
        if labels::is_blank(domain) {
            return None;
        }

        let domain_labels = labels::reversed_labels(domain);
        if domain_labels.len() < self.reversed_labels.len() {
            return None;
        }

        let mut consumed = 0;
        for rule_label in &self.reversed_labels {
            if !label_matches(rule_label, domain_labels[consumed]) {
                return None;
            }
            consumed += 1;
        }

        let mut matched = domain_labels[..consumed].to_vec();
        matched.reverse();

        if self.exception {
            labels::join_labels(&matched[1..])
        } else {
            labels::join_labels(&matched)
        }
    }
}

fn label_matches(rule_label: &str, domain_label: &str) -> bool {
    rule_label == WILDCARD || rule_label == domain_label.to_lowercase()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exception {
            write!(f, "{}{}", EXCEPTION_TOKEN, self.pattern)
        } else {
            write!(f, "{}", self.pattern)
        }
    }
}
