//! Navigation comparison.
//!
//! Navigation items have no id; their `href` is the identity key. Only
//! additions are reported. A relabelled item keeps its `href` and is not
//! reported, and an item dropped from the template is not reported either.

use std::collections::HashSet;

use stencil_types::{ChangeKind, ChangePath, ChangeRecord, NavigationItem};

/// Compare two navigation lists. Nothing is reported unless both lists exist.
pub fn diff_navigation(
    old: Option<&[NavigationItem]>,
    new: Option<&[NavigationItem]>,
) -> Vec<ChangeRecord> {
    let (Some(old), Some(new)) = (old, new) else {
        return Vec::new();
    };

    let known: HashSet<&str> = old.iter().map(|item| item.href.as_str()).collect();

    new.iter()
        .filter(|item| !known.contains(item.href.as_str()))
        .map(|item| {
            ChangeRecord::new(
                ChangeKind::Added,
                ChangePath::navigation(&item.href),
                format!("New navigation item: \"{}\"", item.label),
            )
            .requiring_action("Decide if you want to include this navigation item")
        })
        .collect()
}
