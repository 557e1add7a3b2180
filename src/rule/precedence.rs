//! Prevailing-rule selection.
//!
//! Orders prevailing rules higher: an exception rule always outranks a
//! non-exception rule, and between non-exception rules the one with more
//! labels wins.

use std::cmp::Ordering;

use crate::error::{PslError, Result};

use super::Rule;

/// Total order over rules used to pick the prevailing match.
///
/// Two exception rules compare equal here; [`prevailing`] rejects that
/// situation before the comparison is ever consulted.
fn compare(a: &Rule, b: &Rule) -> Ordering {
    match (a.is_exception(), b.is_exception()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.size().cmp(&b.size()),
    }
}

/// Pick the prevailing rule from a candidate match set.
///
/// Returns `Ok(None)` for an empty set. Two *distinct* exception rules in
/// the same set violate Public Suffix List integrity and fail with
/// [`PslError::ConflictingExceptionRules`] instead of silently picking a
/// winner.
pub(crate) fn prevailing<'a>(rules: &[&'a Rule]) -> Result<Option<&'a Rule>> {
    let mut best: Option<&'a Rule> = None;

    for &rule in rules {
        let Some(current) = best else {
            best = Some(rule);
            continue;
        };

        if rule.is_exception() && current.is_exception() && rule != current {
            return Err(PslError::ConflictingExceptionRules {
                first: current.to_string(),
                second: rule.to_string(),
            });
        }

        if compare(rule, current) == Ordering::Greater {
            best = Some(rule);
        }
    }

    Ok(best)
}
