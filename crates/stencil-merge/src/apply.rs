//! Applying a migration report to a user's tree.
//!
//! Only `Added` records are acted on:
//!
//! - page: the template page is appended unless the user already has that id
//! - section: the template section is appended to the user's matching page
//!   unless that page already has the id
//! - theme: template color slots fill gaps in the user's colors; slots the
//!   user already defines are kept as they are, new slots follow in template
//!   order
//!
//! Navigation additions are reported but never auto-applied, and every
//! lookup miss means "nothing to apply for this record" rather than an error.
//! Lookups resolve duplicate ids the same way the diff does (last occurrence
//! wins) so a re-comparison after merging sees the items that were merged.

use stencil_diff::KeyedIndex;
use stencil_types::{ChangePath, ChangeRecord, ConfigTree, MigrationReport, Page, ThemeSpec};
use tracing::debug;

use crate::config::MergeConfig;

/// Apply `report` to `user` with the default [`MergeConfig`].
///
/// Neither input is modified; the result is a fresh tree.
pub fn apply_migration(
    user: &ConfigTree,
    template: &ConfigTree,
    report: &MigrationReport,
) -> ConfigTree {
    apply_migration_with(&MergeConfig::default(), user, template, report)
}

/// Apply `report` to `user` with an explicit configuration.
pub fn apply_migration_with(
    config: &MergeConfig,
    user: &ConfigTree,
    template: &ConfigTree,
    report: &MigrationReport,
) -> ConfigTree {
    let mut merged = user.clone();
    let template_pages = KeyedIndex::build(&template.pages);
    let mut applied = 0usize;

    for change in report.changes().iter().filter(|c| c.is_addition()) {
        let did_apply = match &change.path {
            ChangePath::Page { page_id } => adopt_page(config, &mut merged, &template_pages, page_id),
            ChangePath::Section {
                page_id,
                section_id,
            } => adopt_section(config, &mut merged, &template_pages, page_id, section_id),
            ChangePath::ThemeColor | ChangePath::ThemeFont => {
                adopt_theme_colors(&mut merged, template.theme.as_ref())
            }
            // Navigation additions need an explicit caller decision.
            ChangePath::Navigation { .. } => false,
        };

        if did_apply {
            applied += 1;
        } else {
            log_skip(change);
        }
    }

    debug!(
        from = %report.from_version,
        to = %report.to_version,
        applied,
        total = report.total_changes(),
        "migration applied"
    );
    merged
}

fn log_skip(change: &ChangeRecord) {
    debug!(path = %change.path, category = %change.category, "nothing to apply");
}

fn adopt_page(
    config: &MergeConfig,
    merged: &mut ConfigTree,
    template_pages: &KeyedIndex<'_, Page>,
    page_id: &str,
) -> bool {
    let Some(template_page) = template_pages.get(page_id) else {
        return false;
    };
    if merged.contains_page(page_id) {
        return false;
    }

    let mut page = template_page.clone();
    page.is_new = config.mark_new_items;
    merged.pages.push(page);
    true
}

fn adopt_section(
    config: &MergeConfig,
    merged: &mut ConfigTree,
    template_pages: &KeyedIndex<'_, Page>,
    page_id: &str,
    section_id: &str,
) -> bool {
    let Some(template_page) = template_pages.get(page_id) else {
        return false;
    };
    let Some(template_section) = KeyedIndex::build(&template_page.sections).get(section_id) else {
        return false;
    };
    let Some(user_page) = merged.pages.iter_mut().rev().find(|p| p.id == page_id) else {
        return false;
    };
    if user_page.contains_section(section_id) {
        return false;
    }

    let mut section = template_section.clone();
    section.is_new = config.mark_new_items;
    user_page.sections.push(section);
    true
}

fn adopt_theme_colors(merged: &mut ConfigTree, template_theme: Option<&ThemeSpec>) -> bool {
    let Some(template_theme) = template_theme else {
        return false;
    };

    let theme = merged.theme.get_or_insert_with(ThemeSpec::default);
    for (slot, value) in &template_theme.color {
        theme
            .color
            .entry(slot.clone())
            .or_insert_with(|| value.clone());
    }
    true
}
