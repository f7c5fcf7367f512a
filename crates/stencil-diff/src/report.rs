//! Migration report assembly.
//!
//! Runs the comparators in a fixed order (pages and their sections, then
//! theme, then navigation) so report output is deterministic for identical
//! inputs.

use stencil_types::{ConfigTree, MigrationReport};
use tracing::debug;

use crate::nav_diff::diff_navigation;
use crate::page_diff::diff_pages;
use crate::theme_diff::diff_themes;

/// Compare an old tree against a new one and build the migration report.
///
/// Version identifiers are opaque and only carried into the report. Callers
/// are expected to skip the comparison entirely when both versions are equal.
///
/// # Examples
///
/// ```
/// use stencil_diff::compare;
/// use stencil_types::{ConfigTree, Page};
///
/// let old = ConfigTree::with_pages(vec![Page::new("p1", "index", "Home")]);
/// let new = ConfigTree::with_pages(vec![
///     Page::new("p1", "index", "Home"),
///     Page::new("p2", "new", "New"),
/// ]);
///
/// let report = compare(&old, &new, "1.0.0", "1.1.0");
/// assert_eq!(report.total_changes(), 1);
/// assert_eq!(report.changes()[0].path.to_string(), "pages.p2");
/// ```
pub fn compare(
    old: &ConfigTree,
    new: &ConfigTree,
    from_version: impl Into<String>,
    to_version: impl Into<String>,
) -> MigrationReport {
    let mut changes = diff_pages(&old.pages, &new.pages);
    let page_changes = changes.len();

    changes.extend(diff_themes(old.theme.as_ref(), new.theme.as_ref()));
    let theme_changes = changes.len() - page_changes;

    changes.extend(diff_navigation(
        old.navigation.as_deref(),
        new.navigation.as_deref(),
    ));
    let navigation_changes = changes.len() - page_changes - theme_changes;

    let report = MigrationReport::new(from_version, to_version, changes);
    debug!(
        from = %report.from_version,
        to = %report.to_version,
        page_changes,
        theme_changes,
        navigation_changes,
        requiring_action = report.changes_requiring_action(),
        "migration report built"
    );
    report
}
