//! Page- and section-level comparison.
//!
//! Pages and sections are matched by id. Added and removed ids produce
//! records; matched pages recurse into their sections. A matched page or
//! section whose other fields changed produces nothing: there is no
//! modification detection at this level.

use stencil_types::{ChangeKind, ChangePath, ChangeRecord, Page, Section};

use crate::keyed::diff_keyed;

/// Compare two page lists.
///
/// Emits added pages (new-tree order), then removed pages (old-tree order),
/// then the section changes of every page present in both, page by page in
/// new-tree order.
pub fn diff_pages(old: &[Page], new: &[Page]) -> Vec<ChangeRecord> {
    let diff = diff_keyed(old, new);
    let mut changes = Vec::with_capacity(diff.added.len() + diff.removed.len());

    for page in &diff.added {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Added,
                ChangePath::page(&page.id),
                format!("New page added: \"{}\" ({})", page.title, page.slug),
            )
            .requiring_action("Review and customize the new page content"),
        );
    }

    for page in &diff.removed {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Removed,
                ChangePath::page(&page.id),
                format!("Page removed: \"{}\" ({})", page.title, page.slug),
            )
            .requiring_action(
                "Your custom content for this page will be preserved but page is no longer in template",
            ),
        );
    }

    for (old_page, new_page) in &diff.common {
        changes.extend(diff_sections(&new_page.id, &old_page.sections, &new_page.sections));
    }

    changes
}

/// Compare the section lists of one page, scoped under `pages.<page_id>`.
pub fn diff_sections(page_id: &str, old: &[Section], new: &[Section]) -> Vec<ChangeRecord> {
    let diff = diff_keyed(old, new);
    let mut changes = Vec::with_capacity(diff.added.len() + diff.removed.len());

    for section in &diff.added {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Added,
                ChangePath::section(page_id, &section.id),
                format!("New section added: \"{}\"", section.section_type),
            )
            .requiring_action("Configure the new section with your content"),
        );
    }

    // Removed sections keep the user's content automatically; nothing to decide.
    for section in &diff.removed {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Removed,
                ChangePath::section(page_id, &section.id),
                format!("Section removed: \"{}\"", section.section_type),
            )
            .with_note("Your custom content will be preserved"),
        );
    }

    changes
}
