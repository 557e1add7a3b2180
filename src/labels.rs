//! Label arithmetic shared by rule matching and the domain facade.
//!
//! Splitting a blank string yields no labels; joining an empty or all-blank
//! list yields `None`, never an empty string.

/// Check if a string is empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Split a domain or rule pattern into its labels.
///
/// Splitting is done at `.`.
pub fn split_labels(pattern: &str) -> Vec<&str> {
    if is_blank(pattern) {
        return Vec::new();
    }

    pattern.split('.').collect()
}

/// Split a domain or rule pattern into its labels, rightmost (TLD) first.
pub fn reversed_labels(pattern: &str) -> Vec<&str> {
    let mut labels = split_labels(pattern);
    labels.reverse();
    labels
}

/// Join labels back into a domain or rule pattern.
///
/// Joining is done with `.`. Returns `None` when there is nothing worth
/// joining: an empty list or a list of blank labels.
pub fn join_labels<S: AsRef<str>>(labels: &[S]) -> Option<String> {
    if labels.iter().all(|label| is_blank(label.as_ref())) {
        return None;
    }

    Some(
        labels
            .iter()
            .map(|label| label.as_ref())
            .collect::<Vec<_>>()
            .join("."),
    )
}
