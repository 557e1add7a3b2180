//! Domain classification facade.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::codec;
use crate::error::Result;
use crate::labels;
use crate::registry::RuleRegistry;

/// Public Suffix List API over a built [`RuleRegistry`].
///
/// Use [`DomainRegistryBuilder`](crate::DomainRegistryBuilder) to build
/// instances.
///
/// All methods accept UTF-8 domain names or Punycode encoded ASCII domain
/// names and return results in the same format as the input. The API is
/// case insensitive.
pub struct DomainRegistry {
    registry: RuleRegistry,
    cache: Mutex<LruCache<String, Option<String>>>,
}

impl DomainRegistry {
    pub(crate) fn new(registry: RuleRegistry, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            registry,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Find the public suffix of a domain.
    ///
    /// If the domain is already a public suffix, it is returned unchanged.
    /// Returns `Ok(None)` for blank input or when no rule matches.
    pub fn public_suffix(&self, domain: &str) -> Result<Option<String>> {
        if labels::is_blank(domain) {
            return Ok(None);
        }

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(domain) {
            return Ok(cached.clone());
        }

        // Cache miss — compute while holding the lock so concurrent
        // queries for the same domain do not recompute it. Matching is
        // CPU-only, no I/O. Errors are propagated, never cached.
        let result = self.compute_public_suffix(domain)?;
        cache.put(domain.to_string(), result.clone());
        Ok(result)
    }

    /// Find the registrable domain name: the label immediately left of the
    /// public suffix.
    ///
    /// Returns `Ok(None)` when no rule matches or when the domain is
    /// itself a public suffix.
    pub fn registrable_name(&self, domain: &str) -> Result<Option<String>> {
        if labels::is_blank(domain) {
            return Ok(None);
        }

        let Some(suffix) = self.public_suffix(domain)? else {
            return Ok(None);
        };

        Ok(prefix_labels(domain, &suffix)
            .and_then(|prefix| prefix.last().map(|label| label.to_string())))
    }

    /// Find the subdomain: everything left of the registrable name.
    ///
    /// Returns `Ok(None)` when no rule matches, the domain is itself a
    /// public suffix, or nothing remains left of the registrable name.
    pub fn sub_domain(&self, domain: &str) -> Result<Option<String>> {
        if labels::is_blank(domain) {
            return Ok(None);
        }

        let Some(suffix) = self.public_suffix(domain)? else {
            return Ok(None);
        };

        Ok(prefix_labels(domain, &suffix)
            .and_then(|prefix| labels::join_labels(&prefix[..prefix.len() - 1])))
    }

    /// The domain without its subdomain: registrable name plus public
    /// suffix.
    ///
    /// Returns `Ok(None)` when no registrable name exists. The boundary is
    /// located by label arithmetic, so domains with repeated label text
    /// are stripped correctly.
    pub fn strip_sub_domain(&self, domain: &str) -> Result<Option<String>> {
        if labels::is_blank(domain) {
            return Ok(None);
        }

        let Some(suffix) = self.public_suffix(domain)? else {
            return Ok(None);
        };

        let domain_labels = labels::split_labels(domain);
        let suffix_labels = labels::split_labels(&suffix);
        if domain_labels.len() == suffix_labels.len() {
            return Ok(None);
        }

        let registrable_index = domain_labels.len() - suffix_labels.len() - 1;
        Ok(labels::join_labels(&domain_labels[registrable_index..]))
    }

    /// The underlying rule registry.
    pub fn rule_registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.registry.rules().len()
    }

    /// Clear the lookup cache.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }

    fn compute_public_suffix(&self, domain: &str) -> Result<Option<String>> {
        let (decoded, was_encoded) = codec::decode(domain);

        let Some(rule) = self.registry.find_rule(&decoded)? else {
            return Ok(None);
        };

        // Re-run the match against the prevailing rule so the suffix text
        // is exactly what this rule computes, including exception-rule
        // label dropping.
        Ok(rule
            .match_suffix(&decoded)
            .map(|suffix| codec::recode(&suffix, was_encoded)))
    }
}

/// Labels of `domain` left of the suffix boundary, or `None` when the
/// domain is the suffix itself.
fn prefix_labels<'a>(domain: &'a str, suffix: &str) -> Option<Vec<&'a str>> {
    let domain_labels = labels::split_labels(domain);
    let suffix_labels = labels::split_labels(suffix);

    if domain_labels.len() == suffix_labels.len() {
        return None;
    }

    let registrable_index = domain_labels.len() - suffix_labels.len();
    Some(domain_labels[..registrable_index].to_vec())
}
