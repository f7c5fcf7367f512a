//! Stored records: templates and the user sites cloned from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stencil_types::{ChangeRecord, ConfigTree};

/// A canonical, versioned site template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Opaque version identifier, compared only for equality.
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// The current version's config tree.
    pub config: ConfigTree,
    pub is_active: bool,
    /// One entry per published version after the first.
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
    /// Archived configs of earlier versions, oldest first.
    #[serde(default)]
    pub previous_versions: Vec<PreviousVersion>,
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// An active template in the `general` category.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        config: ConfigTree,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            description: String::new(),
            category: "general".into(),
            config,
            is_active: true,
            changelog: Vec::new(),
            previous_versions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Changes introduced by one template version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub version: String,
    pub date: DateTime<Utc>,
    pub changes: Vec<ChangeRecord>,
}

/// An archived template version.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousVersion {
    pub version: String,
    pub config: ConfigTree,
    pub created_at: DateTime<Utc>,
}

/// A user's independently editable clone of a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSite {
    /// URL-friendly unique identifier.
    pub site_id: String,
    pub name: String,
    pub template_id: String,
    /// Template version the draft was last cloned or migrated from.
    pub template_version: String,
    /// The user's working copy.
    pub draft_content: ConfigTree,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
