//! Migration reports: the ordered change list between two tree versions.

use serde::{Deserialize, Serialize};

use crate::change::{ChangeCategory, ChangeKind, ChangePath, ChangeRecord};
use crate::error::{TypeError, TypeResult};

/// Aggregated result of comparing two config trees.
///
/// `total_changes` and `changes_requiring_action` are always derived from the
/// change list. They appear in the serialized form for consumers, and a
/// deserialized report whose declared counts disagree with its list is
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ReportWire", try_from = "ReportWire")]
pub struct MigrationReport {
    /// Opaque version identifier of the old tree.
    pub from_version: String,
    /// Opaque version identifier of the new tree.
    pub to_version: String,
    changes: Vec<ChangeRecord>,
}

impl MigrationReport {
    pub fn new(
        from_version: impl Into<String>,
        to_version: impl Into<String>,
        changes: Vec<ChangeRecord>,
    ) -> Self {
        Self {
            from_version: from_version.into(),
            to_version: to_version.into(),
            changes,
        }
    }

    /// The changes, in report order.
    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<ChangeRecord> {
        self.changes
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    pub fn changes_requiring_action(&self) -> usize {
        self.changes.iter().filter(|c| c.requires_action).count()
    }

    /// Number of changes of the given kind.
    pub fn count_kind(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Changes in one category, in report order.
    pub fn in_category(&self, category: ChangeCategory) -> impl Iterator<Item = &ChangeRecord> {
        self.changes.iter().filter(move |c| c.category == category)
    }

    /// The first change addressing `path`.
    pub fn find(&self, path: &ChangePath) -> Option<&ChangeRecord> {
        self.changes.iter().find(|c| &c.path == path)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportWire {
    from_version: String,
    to_version: String,
    total_changes: usize,
    changes_requiring_action: usize,
    #[serde(default)]
    changes: Vec<ChangeRecord>,
}

impl From<MigrationReport> for ReportWire {
    fn from(report: MigrationReport) -> Self {
        Self {
            total_changes: report.total_changes(),
            changes_requiring_action: report.changes_requiring_action(),
            from_version: report.from_version,
            to_version: report.to_version,
            changes: report.changes,
        }
    }
}

impl TryFrom<ReportWire> for MigrationReport {
    type Error = TypeError;

    fn try_from(wire: ReportWire) -> TypeResult<Self> {
        let report = MigrationReport::new(wire.from_version, wire.to_version, wire.changes);

        let derived = report.total_changes();
        if wire.total_changes != derived {
            return Err(TypeError::CountMismatch {
                field: "totalChanges",
                declared: wire.total_changes,
                derived,
            });
        }
        let derived = report.changes_requiring_action();
        if wire.changes_requiring_action != derived {
            return Err(TypeError::CountMismatch {
                field: "changesRequiringAction",
                declared: wire.changes_requiring_action,
                derived,
            });
        }
        Ok(report)
    }
}
