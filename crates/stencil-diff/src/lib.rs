//! Structural comparison of Stencil config trees.
//!
//! Detects what changed between two versions of a site (typically the user's
//! current tree and a newer template) and assembles the result into a
//! [`MigrationReport`](stencil_types::MigrationReport).
//!
//! # Key Items
//!
//! - [`compare`] -- full tree comparison in report order
//! - [`diff_keyed`] / [`KeyedDiff`] -- identity-keyed collection diff
//! - [`diff_pages`] / [`diff_sections`] -- page and section additions/removals
//! - [`diff_themes`] -- new color slots and font changes
//! - [`diff_navigation`] -- navigation additions (by `href`)

pub mod keyed;
pub mod nav_diff;
pub mod page_diff;
pub mod report;
pub mod theme_diff;

pub use keyed::{diff_keyed, Keyed, KeyedDiff, KeyedIndex};
pub use nav_diff::diff_navigation;
pub use page_diff::{diff_pages, diff_sections};
pub use report::compare;
pub use theme_diff::diff_themes;
