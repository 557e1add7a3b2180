//! Punycode recoding.
//!
//! Matching always runs on the Unicode form of a domain; callers may pass
//! either form and get results back in the form they used. The pair below
//! is pure: [`decode`] reports whether the input was ASCII-encoded, and the
//! caller threads that flag into [`recode`].

/// Decode a domain name into its Unicode form.
///
/// Returns the decoded domain and whether the input was Punycode-encoded.
/// Input that fails IDNA processing is passed through unchanged.
pub fn decode(domain: &str) -> (String, bool) {
    let (unicode, result) = idna::domain_to_unicode(domain);
    if result.is_err() {
        return (domain.to_string(), false);
    }

    let was_encoded = unicode != domain;
    (unicode, was_encoded)
}

/// Return `domain` in the caller's original form.
///
/// Re-encodes to ASCII when the original input was Punycode-encoded,
/// otherwise returns the domain unchanged.
pub fn recode(domain: &str, was_encoded: bool) -> String {
    if !was_encoded {
        return domain.to_string();
    }

    idna::domain_to_ascii(domain).unwrap_or_else(|_| domain.to_string())
}
