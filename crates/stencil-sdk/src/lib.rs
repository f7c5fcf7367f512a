//! Stencil SDK -- high-level API for template-backed sites.
//!
//! Wraps the diff and merge engines with the workflow around them: cloning a
//! template into a user site, checking whether the template has moved on,
//! pulling its additions into the site, and publishing new template versions
//! with a generated changelog.

pub mod error;
pub mod site_id;
pub mod stencil;
pub mod update;

pub use error::{SdkError, SdkResult};
pub use site_id::{generate_site_id, slugify};
pub use stencil::Stencil;
pub use update::{AppliedUpdate, ArchivedVersion, UpdateCheck, VersionHistory};
