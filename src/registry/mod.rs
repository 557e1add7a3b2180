//! Rule registry: a label trie over Public Suffix List rules.
//!
//! Rules are inserted along their reversed label paths (TLD-first) into a
//! mutable trie, which is then frozen into an immutable structure. The
//! frozen registry is read-only and safe for concurrent lookups.

mod node;

use tracing::debug;

use crate::error::{PslError, Result};
use crate::labels;
use crate::rule::{prevailing, Rule};

use node::{Node, NodeBuilder};

/// Finds rules that match domains.
///
/// Built once from a flat rule list, immutable afterwards. Lookups are
/// case-insensitive and run in time proportional to the domain's label
/// count, not the rule count.
pub struct RuleRegistry {
    root: Node,
}

impl RuleRegistry {
    /// Build a registry from parsed rules.
    ///
    /// Fails with [`PslError::EmptyRegistry`] when `rules` is empty; a
    /// registry without rules cannot answer any query correctly.
    pub fn build(rules: Vec<Rule>) -> Result<Self> {
        let mut root = NodeBuilder::new();
        for rule in rules {
            let path = rule.reversed_labels().to_vec();
            root.descendant_mut(&path).set_rule(rule);
        }

        let registry = Self {
            root: root.freeze(),
        };

        let count = registry.rules().len();
        if count == 0 {
            return Err(PslError::EmptyRegistry);
        }

        debug!(rules = count, "rule registry built");
        Ok(registry)
    }

    /// Find all rules matching `domain`.
    ///
    /// The literal and wildcard trie branches are explored independently,
    /// so the result may hold several rules for one domain. An empty result
    /// means the domain is not covered by any rule.
    pub fn find_rules(&self, domain: &str) -> Vec<&Rule> {
        let domain = domain.to_lowercase();
        let reversed = labels::reversed_labels(&domain);

        let mut matches = Vec::new();
        self.root.collect_matches(&reversed, &mut matches);
        matches
    }

    /// Find the prevailing rule for `domain`.
    ///
    /// Returns `Ok(None)` when no rule matches. Fails only when the rule
    /// data itself is contradictory (two distinct exception rules matching
    /// the same domain).
    pub fn find_rule(&self, domain: &str) -> Result<Option<&Rule>> {
        prevailing(&self.find_rules(domain))
    }

    /// All rules managed by this registry.
    pub fn rules(&self) -> Vec<&Rule> {
        let mut rules = Vec::new();
        self.root.collect_rules(&mut rules);
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(patterns: &[&str]) -> RuleRegistry {
        let rules = patterns
            .iter()
            .map(|pattern| Rule::new(pattern).unwrap())
            .collect();
        RuleRegistry::build(rules).unwrap()
    }

    #[test]
    fn test_empty_rule_list_rejected() {
        assert!(matches!(
            RuleRegistry::build(Vec::new()),
            Err(PslError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_rules_traversal() {
        let registry = registry(&["com", "blogspot.com", "*.ck", "!www.ck"]);
        assert_eq!(registry.rules().len(), 4);
    }

    #[test]
    fn test_find_rules_unions_branches() {
        let registry = registry(&["*.ck", "!www.ck"]);

        let matched = registry.find_rules("www.ck");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_find_rules_blank_domain() {
        let registry = registry(&["com"]);
        assert!(registry.find_rules("").is_empty());
        assert!(registry.find_rules(" ").is_empty());
    }

    #[test]
    fn test_find_rules_case_insensitive() {
        let registry = registry(&["com"]);
        assert_eq!(registry.find_rules("Test.COM").len(), 1);
    }

    #[test]
    fn test_find_rule_picks_most_specific() {
        let registry = registry(&["com", "blogspot.com"]);

        let rule = registry.find_rule("test.blogspot.com").unwrap().unwrap();
        assert_eq!(rule.pattern(), "blogspot.com");
    }

    #[test]
    fn test_find_rule_prefers_exception() {
        let registry = registry(&["*.ck", "!www.ck"]);

        let rule = registry.find_rule("www.ck").unwrap().unwrap();
        assert!(rule.is_exception());
    }

    #[test]
    fn test_find_rule_no_match() {
        let registry = registry(&["com"]);
        assert!(registry.find_rule("test.invalid").unwrap().is_none());
    }

    #[test]
    fn test_find_rule_stable_across_calls() {
        let registry = registry(&["com", "blogspot.com", "*.ck", "!www.ck"]);

        for domain in ["test.blogspot.com", "www.ck", "pub.ck"] {
            let first = registry.find_rule(domain).unwrap();
            let second = registry.find_rule(domain).unwrap();
            assert_eq!(first, second, "unstable result for {}", domain);
        }
    }

    #[test]
    fn test_nested_wildcard_levels_compose() {
        let registry = registry(&["*.*.ck"]);

        let rule = registry.find_rule("a.b.ck").unwrap().unwrap();
        assert_eq!(rule.pattern(), "*.*.ck");
        assert!(registry.find_rule("b.ck").unwrap().is_none());
    }

    #[test]
    fn test_conflicting_exception_rules_surface_as_error() {
        let registry = registry(&["*.ck", "!www.ck", "!sub.www.ck"]);

        assert!(matches!(
            registry.find_rule("sub.www.ck"),
            Err(PslError::ConflictingExceptionRules { .. })
        ));
    }
}
