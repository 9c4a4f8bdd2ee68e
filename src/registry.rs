//! Identifier registry: maps each `dag_id` to the files declaring it.
//!
//! Built fresh on every run; no persistence. The invariant checked at the end
//! of a scan is that every identifier maps to exactly one file — anything
//! mapping to two or more is a duplicate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::report::DuplicateId;

/// In-memory registry of `dag_id` → declaring files, in encounter order.
#[derive(Debug, Default)]
pub struct IdRegistry {
    ids: BTreeMap<String, Vec<PathBuf>>,
}

impl IdRegistry {
    /// Record that `file` declares `dag_id`, appending to the list from any
    /// prior file.
    pub fn record(&mut self, dag_id: String, file: &Path) {
        self.ids.entry(dag_id).or_default().push(file.to_owned());
    }

    /// Consume the registry and return every identifier declared by more than
    /// one file, sorted by identifier.
    #[must_use]
    pub fn into_duplicates(self) -> Vec<DuplicateId> {
        self.ids
            .into_iter()
            .filter(|(_, files)| files.len() > 1)
            .map(|(dag_id, files)| DuplicateId { dag_id, files })
            .collect()
    }
}
