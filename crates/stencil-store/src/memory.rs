use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::record::{Template, UserSite};
use crate::traits::{SiteStore, TemplateStore};

/// In-memory, HashMap-based template and site store.
///
/// Intended for tests and embedding. Records are held behind `RwLock`s for
/// safe concurrent access and cloned on every read and write, so no caller
/// can observe another caller's in-progress edits.
pub struct InMemoryStore {
    templates: RwLock<HashMap<String, Template>>,
    sites: RwLock<HashMap<String, UserSite>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            templates: RwLock::new(HashMap::new()),
            sites: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored templates.
    pub fn template_count(&self) -> usize {
        self.templates.read().expect("lock poisoned").len()
    }

    /// Number of stored sites.
    pub fn site_count(&self) -> usize {
        self.sites.read().expect("lock poisoned").len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get_template(&self, id: &str) -> StoreResult<Option<Template>> {
        let map = self.templates.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn insert_template(&self, template: &Template) -> StoreResult<()> {
        let mut map = self.templates.write().expect("lock poisoned");
        if map.contains_key(&template.id) {
            return Err(StoreError::Duplicate {
                kind: "template",
                id: template.id.clone(),
            });
        }
        map.insert(template.id.clone(), template.clone());
        Ok(())
    }

    fn update_template(&self, template: &Template) -> StoreResult<()> {
        let mut map = self.templates.write().expect("lock poisoned");
        match map.get_mut(&template.id) {
            Some(slot) => {
                *slot = template.clone();
                Ok(())
            }
            None => Err(StoreError::TemplateNotFound(template.id.clone())),
        }
    }

    fn list_templates(&self, category: Option<&str>) -> StoreResult<Vec<Template>> {
        let map = self.templates.read().expect("lock poisoned");
        let mut templates: Vec<Template> = map
            .values()
            .filter(|t| t.is_active)
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(templates)
    }
}

impl SiteStore for InMemoryStore {
    fn get_site(&self, site_id: &str) -> StoreResult<Option<UserSite>> {
        let map = self.sites.read().expect("lock poisoned");
        Ok(map.get(site_id).cloned())
    }

    fn insert_site(&self, site: &UserSite) -> StoreResult<()> {
        let mut map = self.sites.write().expect("lock poisoned");
        if map.contains_key(&site.site_id) {
            return Err(StoreError::Duplicate {
                kind: "site",
                id: site.site_id.clone(),
            });
        }
        map.insert(site.site_id.clone(), site.clone());
        Ok(())
    }

    fn update_site(&self, site: &UserSite) -> StoreResult<()> {
        let mut map = self.sites.write().expect("lock poisoned");
        match map.get_mut(&site.site_id) {
            Some(slot) => {
                *slot = site.clone();
                Ok(())
            }
            None => Err(StoreError::SiteNotFound(site.site_id.clone())),
        }
    }

    fn list_sites(&self) -> StoreResult<Vec<UserSite>> {
        let map = self.sites.read().expect("lock poisoned");
        let mut sites: Vec<UserSite> = map.values().cloned().collect();
        sites.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.site_id.cmp(&b.site_id))
        });
        Ok(sites)
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("template_count", &self.template_count())
            .field("site_count", &self.site_count())
            .finish()
    }
}
