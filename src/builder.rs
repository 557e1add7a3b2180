//! Builder for [`DomainRegistry`] instances.

use crate::domain::DomainRegistry;
use crate::error::Result;
use crate::parser::parse_rules;
use crate::registry::RuleRegistry;
use crate::rule::Rule;

/// Default LRU cache size for facade lookups
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Collects rules and builds a [`DomainRegistry`].
///
/// Rule loading is the caller's concern; the builder consumes rule text or
/// already-constructed [`Rule`] values.
pub struct DomainRegistryBuilder {
    rules: Vec<Rule>,
    cache_size: usize,
}

impl Default for DomainRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainRegistryBuilder {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }

    /// Add a single rule from its pattern.
    pub fn with_rule(mut self, pattern: &str) -> Result<Self> {
        self.rules.push(Rule::new(pattern)?);
        Ok(self)
    }

    /// Add already-constructed rules.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Add rules parsed from Public Suffix List text.
    pub fn with_rule_text(mut self, text: &str) -> Result<Self> {
        self.rules.extend(parse_rules(text)?);
        Ok(self)
    }

    /// Set the LRU cache size for facade lookups.
    pub fn cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Build the [`DomainRegistry`] from the registered rules.
    ///
    /// Fails with [`PslError::EmptyRegistry`](crate::PslError::EmptyRegistry)
    /// when no rules were registered.
    pub fn build(self) -> Result<DomainRegistry> {
        let registry = RuleRegistry::build(self.rules)?;
        Ok(DomainRegistry::new(registry, self.cache_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PslError;

    #[test]
    fn test_build_from_patterns() {
        let registry = DomainRegistryBuilder::new()
            .with_rule("com")
            .unwrap()
            .with_rule("*.ck")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.rule_count(), 2);
    }

    #[test]
    fn test_build_from_rule_text() {
        let registry = DomainRegistryBuilder::new()
            .with_rule_text("// comment\ncom\nnet\n")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.rule_count(), 2);
    }

    #[test]
    fn test_build_from_rule_values() {
        let rules = vec![Rule::new("com").unwrap(), Rule::new("org").unwrap()];
        let registry = DomainRegistryBuilder::new()
            .with_rules(rules)
            .build()
            .unwrap();

        assert_eq!(registry.rule_count(), 2);
    }

    #[test]
    fn test_build_without_rules_fails() {
        assert!(matches!(
            DomainRegistryBuilder::new().build(),
            Err(PslError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_invalid_pattern_fails_early() {
        assert!(matches!(
            DomainRegistryBuilder::new().with_rule("!"),
            Err(PslError::EmptyPattern)
        ));
    }

    #[test]
    fn test_comment_only_text_builds_empty() {
        let result = DomainRegistryBuilder::new()
            .with_rule_text("// only comments\n\n")
            .unwrap()
            .build();

        assert!(matches!(result, Err(PslError::EmptyRegistry)));
    }
}
