use serde::{Deserialize, Serialize};

/// Configuration for applying a migration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Flag pages and sections introduced by the merge so a presentation
    /// layer can highlight them.
    pub mark_new_items: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            mark_new_items: true,
        }
    }
}

impl MergeConfig {
    /// Copy template items without the newly-introduced marker.
    pub fn unmarked() -> Self {
        Self {
            mark_new_items: false,
        }
    }
}
