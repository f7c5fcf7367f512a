//! Merge engine for Stencil.
//!
//! Takes a user's site, the newer template it was cloned from, and the
//! migration report between them, and produces a new site with the
//! template's additions pulled in. User-authored content is never removed or
//! overwritten: removals and modifications are reported for visibility only.

pub mod apply;
pub mod config;

pub use apply::{apply_migration, apply_migration_with};
pub use config::MergeConfig;
