//! `dag_id` extraction via pattern matching on source text.
//!
//! Extraction is deliberately textual, not syntactic: the pattern matches the
//! canonical literal-valued assignment `dag_id = "<string>"` wherever it
//! appears. Assignments inside string literals, comments, or computed
//! expressions over- or under-match accordingly. That is documented behavior
//! of the tool, not a bug — true Python parsing would be a different, heavier
//! system.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a `dag_id` assignment with a quoted string literal value.
///
/// `\s*` around `=` tolerates the assignment spanning multiple lines, so
/// keyword-style arguments inside a wrapped `DAG(...)` call are caught too.
/// Single and double quotes are accepted; the quote style must match.
static DAG_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r#"\bdag_id\s*=\s*(?:"([^"]+)"|'([^']+)')"#) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid dag_id pattern: {err}"),
    }
});

/// Extract every `dag_id` declared in `content`, deduplicated.
///
/// A file that assigns the same identifier twice yields one entry: only
/// cross-file duplication is the property being checked, so per-file
/// repetition is collapsed here.
#[must_use]
pub fn extract_dag_ids(content: &str) -> BTreeSet<String> {
    DAG_ID_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_owned())
        })
        .collect()
}
