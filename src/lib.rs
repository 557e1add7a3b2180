//! PSL Engine - A Public Suffix List (PSL) matching engine for Rust
//!
//! This library classifies domain names against the Public Suffix List
//! rule set:
//! - Public suffix extraction (`co.uk`, `blogspot.com`)
//! - Registrable name and subdomain extraction
//! - Wildcard (`*`) and exception (`!`) rule semantics
//! - Unicode and Punycode domain names (results keep the input's format)
//! - LRU caching for repeated lookups
//!
//! # Example
//!
//! ```rust
//! use psl_engine::DomainRegistryBuilder;
//!
//! let rules_text = "
//! // see https://publicsuffix.org
//! com
//! blogspot.com
//! *.ck
//! !www.ck
//! ";
//!
//! let registry = DomainRegistryBuilder::new()
//!     .with_rule_text(rules_text)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let suffix = registry.public_suffix("sub.test.blogspot.com").unwrap();
//! assert_eq!(suffix.as_deref(), Some("blogspot.com"));
//!
//! let name = registry.registrable_name("sub.test.blogspot.com").unwrap();
//! assert_eq!(name.as_deref(), Some("test"));
//! ```
//!
//! # Rule Syntax
//!
//! One rule per line; blank lines and `//` comments are ignored.
//!
//! | Rule | Example | Description |
//! |------|---------|-------------|
//! | Literal | `co.uk` | Matches the suffix and everything under it |
//! | Wildcard | `*.ck` | `*` matches any single label in its position |
//! | Exception | `!www.ck` | Marks a name excluded from a broader wildcard; its parent is the suffix |
//!
//! When several rules match one domain, the prevailing rule is the
//! exception rule if present, otherwise the rule with the most labels.

pub mod builder;
pub mod codec;
pub mod domain;
pub mod error;
pub mod labels;
pub mod parser;
pub mod registry;
pub mod rule;

// Re-export commonly used items
pub use builder::{DomainRegistryBuilder, DEFAULT_CACHE_SIZE};
pub use domain::DomainRegistry;
pub use error::{PslError, Result};
pub use parser::{parse_line, parse_rules};
pub use registry::RuleRegistry;
pub use rule::{Rule, EXCEPTION_TOKEN, WILDCARD};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let rules_text = r#"
// ICANN suffixes
com
com.cn

// ck : https://en.wikipedia.org/wiki/.ck
*.ck
!www.ck

// private suffixes
blogspot.com
"#;

        // Parse rules
        let rules = parse_rules(rules_text).unwrap();
        assert_eq!(rules.len(), 5);

        // Build the registry
        let registry = DomainRegistryBuilder::new()
            .with_rules(rules)
            .cache_size(64)
            .build()
            .unwrap();
        assert_eq!(registry.rule_count(), 5);

        // Literal suffix
        let suffix = registry.public_suffix("example.com").unwrap();
        assert_eq!(suffix.as_deref(), Some("com"));

        // More specific literal wins over "com"
        let suffix = registry.public_suffix("test.blogspot.com").unwrap();
        assert_eq!(suffix.as_deref(), Some("blogspot.com"));

        // Wildcard suffix
        let suffix = registry.public_suffix("test.pub.ck").unwrap();
        assert_eq!(suffix.as_deref(), Some("pub.ck"));

        // Exception rule: www.ck is registrable under "ck"
        let suffix = registry.public_suffix("www.ck").unwrap();
        assert_eq!(suffix.as_deref(), Some("ck"));
        let name = registry.registrable_name("www.ck").unwrap();
        assert_eq!(name.as_deref(), Some("www"));

        // Unknown TLD
        assert_eq!(registry.public_suffix("test.invalid").unwrap(), None);

        // The prevailing rule is the comparator maximum of the match set
        let rules = registry.rule_registry().find_rules("test.blogspot.com");
        assert_eq!(rules.len(), 2);
        let rule = registry
            .rule_registry()
            .find_rule("test.blogspot.com")
            .unwrap()
            .unwrap();
        assert_eq!(rule.pattern(), "blogspot.com");
    }
}
