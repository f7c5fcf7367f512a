use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stencil_store::ChangelogEntry;
use stencil_types::MigrationReport;

/// Result of checking a site against its template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UpdateCheck {
    /// The site already tracks the template's current version.
    #[serde(rename_all = "camelCase")]
    UpToDate { current_version: String },
    /// A newer template version exists.
    #[serde(rename_all = "camelCase")]
    Available {
        current_version: String,
        latest_version: String,
        report: MigrationReport,
    },
}

impl UpdateCheck {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The migration report, if an update is available.
    pub fn report(&self) -> Option<&MigrationReport> {
        match self {
            Self::Available { report, .. } => Some(report),
            Self::UpToDate { .. } => None,
        }
    }
}

/// Outcome of applying a template update to a site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedUpdate {
    pub site_id: String,
    pub previous_version: String,
    pub new_version: String,
    /// Total changes in the report the update was computed from.
    pub applied_changes: usize,
}

/// Version history of a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistory {
    pub current_version: String,
    pub changelog: Vec<ChangelogEntry>,
    pub previous_versions: Vec<ArchivedVersion>,
}

/// An archived template version, without its config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedVersion {
    pub version: String,
    pub created_at: DateTime<Utc>,
}
