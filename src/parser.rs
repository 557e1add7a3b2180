use tracing::debug;

use crate::error::{PslError, Result};
use crate::rule::Rule;

/// Parse Public Suffix List rules from text.
///
/// One rule per line. Blank lines and lines starting with `//` are
/// ignored. Only the first whitespace-delimited token of a line is the
/// pattern; trailing free text is dropped.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        match parse_line(line) {
            Ok(Some(rule)) => rules.push(rule),
            Ok(None) => {}
            Err(e) => {
                return Err(PslError::ParseErrorAtLine {
                    line: line_num,
                    message: e.to_string(),
                })
            }
        }
    }

    debug!(rules = rules.len(), "parsed rule list");
    Ok(rules)
}

/// Parse a single line into a [`Rule`], if it holds one.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Rule>> {
    let line = line.trim();

    if line.is_empty() || line.starts_with("//") {
        return Ok(None);
    }

    let pattern = line.split_whitespace().next().unwrap_or(line);
    Rule::new(pattern).map(Some)
}
