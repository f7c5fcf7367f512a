//! URL-friendly site identifiers.

use uuid::Uuid;

const MAX_SLUG_LEN: usize = 30;
const SUFFIX_LEN: usize = 8;

/// Generate a unique site id: a slug of `name` plus a random 8-hex suffix.
///
/// # Examples
///
/// ```
/// use stencil_sdk::generate_site_id;
///
/// let id = generate_site_id("My School!");
/// assert!(id.starts_with("my-school-"));
/// assert_eq!(id.len(), "my-school-".len() + 8);
/// ```
pub fn generate_site_id(name: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", slugify(name), &suffix[..SUFFIX_LEN])
}

/// Lowercase, strip everything except ASCII word characters, whitespace and
/// `-`, turn whitespace runs into a single `-`, collapse repeated `-`, and cap
/// the length.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.trim().chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '_' {
            ch
        } else if ch.is_whitespace() || ch == '-' {
            '-'
        } else {
            continue;
        };
        if mapped == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(mapped);
    }

    slug.chars().take(MAX_SLUG_LEN).collect()
}
