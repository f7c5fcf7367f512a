//! Foundation types for Stencil.
//!
//! Stencil clones a versioned site template into an independently editable
//! copy and later pulls template improvements forward without discarding the
//! user's customizations. This crate holds the values every other Stencil
//! crate exchanges.
//!
//! # Key Types
//!
//! - [`ConfigTree`] / [`Page`] / [`Section`] / [`ThemeSpec`] / [`NavigationItem`] -- one version of a site
//! - [`ChangePath`] -- typed locator for a single tree node
//! - [`ChangeRecord`] -- one detected difference
//! - [`MigrationReport`] -- ordered change list with derived counts

pub mod change;
pub mod error;
pub mod report;
pub mod tree;

pub use change::{ChangeCategory, ChangeKind, ChangePath, ChangeRecord};
pub use error::{TypeError, TypeResult};
pub use report::MigrationReport;
pub use tree::{
    ConfigTree, DynamicConfig, NavigationItem, Page, Props, Section, Seo, ThemeSlots, ThemeSpec,
};
