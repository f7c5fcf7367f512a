//! Storage interfaces for Stencil.
//!
//! The migration engine never touches storage. This crate defines what a
//! persistence backend must provide to the higher-level workflow: canonical
//! templates (with their version history) and user sites cloned from them.
//!
//! # Record Types
//!
//! - [`Template`] -- a versioned template with changelog and archived versions
//! - [`UserSite`] -- a user's editable clone, tagged with its template version
//!
//! # Storage Backends
//!
//! All backends implement [`TemplateStore`] and [`SiteStore`]:
//!
//! - [`InMemoryStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Reads return owned copies; mutating a returned record never changes the store.
//! 2. Inserts never overwrite and updates never create.
//! 3. Missing records on read are `Ok(None)`, not errors.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use record::{ChangelogEntry, PreviousVersion, Template, UserSite};
pub use traits::{SiteStore, TemplateStore};
