//! Theme comparison.
//!
//! Two independent checks with different action policies: new color slots
//! are additive and need no decision, while a font change affects the whole
//! site and must be chosen deliberately. Font-size and font-weight tokens are
//! not compared.

use stencil_types::{ChangeKind, ChangePath, ChangeRecord, ThemeSpec};

/// Compare two themes. Nothing is reported unless both sides have a theme.
pub fn diff_themes(old: Option<&ThemeSpec>, new: Option<&ThemeSpec>) -> Vec<ChangeRecord> {
    let (Some(old), Some(new)) = (old, new) else {
        return Vec::new();
    };

    let mut changes = Vec::new();

    let added_slots: Vec<&str> = new
        .color
        .keys()
        .filter(|slot| !old.color.contains_key(*slot))
        .map(String::as_str)
        .collect();
    if !added_slots.is_empty() {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Added,
                ChangePath::ThemeColor,
                format!("New color options: {}", added_slots.join(", ")),
            )
            .with_note("Optional: customize the new color settings"),
        );
    }

    if old.font != new.font {
        changes.push(
            ChangeRecord::new(
                ChangeKind::Modified,
                ChangePath::ThemeFont,
                format!(
                    "Font changed from \"{}\" to \"{}\"",
                    font_label(old),
                    font_label(new)
                ),
            )
            .requiring_action("Review if you want to keep your current font or adopt the new one"),
        );
    }

    changes
}

fn font_label(theme: &ThemeSpec) -> &str {
    theme.font.as_deref().unwrap_or("(none)")
}
