use crate::error::StoreResult;
use crate::record::{Template, UserSite};

/// Storage for canonical templates.
///
/// Implementations hand out owned copies: a caller mutating a returned
/// template never affects what another caller reads.
pub trait TemplateStore: Send + Sync {
    /// Read a template by id.
    ///
    /// Returns `Ok(None)` if the template does not exist.
    fn get_template(&self, id: &str) -> StoreResult<Option<Template>>;

    /// Insert a new template. Fails with `Duplicate` if the id is taken.
    fn insert_template(&self, template: &Template) -> StoreResult<()>;

    /// Replace an existing template. Fails with `TemplateNotFound` if absent.
    fn update_template(&self, template: &Template) -> StoreResult<()>;

    /// Active templates, newest first, optionally restricted to one category.
    fn list_templates(&self, category: Option<&str>) -> StoreResult<Vec<Template>>;
}

/// Storage for user sites cloned from templates.
pub trait SiteStore: Send + Sync {
    /// Read a site by its site id.
    ///
    /// Returns `Ok(None)` if the site does not exist.
    fn get_site(&self, site_id: &str) -> StoreResult<Option<UserSite>>;

    /// Insert a new site. Fails with `Duplicate` if the site id is taken.
    fn insert_site(&self, site: &UserSite) -> StoreResult<()>;

    /// Replace an existing site. Fails with `SiteNotFound` if absent.
    fn update_site(&self, site: &UserSite) -> StoreResult<()>;

    /// All sites, most recently updated first.
    fn list_sites(&self) -> StoreResult<Vec<UserSite>>;
}
