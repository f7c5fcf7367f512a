use chrono::Utc;
use stencil_diff::compare;
use stencil_merge::{apply_migration_with, MergeConfig};
use stencil_store::{ChangelogEntry, PreviousVersion, SiteStore, Template, TemplateStore, UserSite};
use stencil_types::ConfigTree;
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};
use crate::site_id::generate_site_id;
use crate::update::{AppliedUpdate, ArchivedVersion, UpdateCheck, VersionHistory};

/// High-level Stencil API over a template and site store.
pub struct Stencil<S> {
    store: S,
    merge: MergeConfig,
}

impl<S> Stencil<S>
where
    S: TemplateStore + SiteStore,
{
    /// Wrap a store with the default merge configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            merge: MergeConfig::default(),
        }
    }

    pub fn with_merge_config(mut self, merge: MergeConfig) -> Self {
        self.merge = merge;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- Sites ----

    /// Clone a template into a new site. `name` defaults to the template's name.
    pub fn create_site(&self, template_id: &str, name: Option<&str>) -> SdkResult<UserSite> {
        let template = self.load_template(template_id)?;
        let name = name.map_or_else(|| template.name.clone(), str::to_string);
        let now = Utc::now();

        let site = UserSite {
            site_id: generate_site_id(&name),
            name,
            template_id: template.id,
            template_version: template.version,
            draft_content: template.config,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_site(&site)?;

        info!(site = %site.site_id, template = %site.template_id, version = %site.template_version, "site created");
        Ok(site)
    }

    /// Replace a site's draft with the user's edited tree.
    pub fn update_draft(&self, site_id: &str, draft: ConfigTree) -> SdkResult<UserSite> {
        let mut site = self.load_site(site_id)?;
        site.draft_content = draft;
        site.updated_at = Utc::now();
        self.store.update_site(&site)?;
        Ok(site)
    }

    // ---- Template updates ----

    /// Compare a site against the current version of its template.
    ///
    /// When the versions are equal the trees are not compared at all.
    pub fn check_update(&self, site_id: &str) -> SdkResult<UpdateCheck> {
        let site = self.load_site(site_id)?;
        let template = self.load_template(&site.template_id)?;

        if template.version == site.template_version {
            return Ok(UpdateCheck::UpToDate {
                current_version: site.template_version,
            });
        }

        let report = compare(
            &site.draft_content,
            &template.config,
            &site.template_version,
            &template.version,
        );
        Ok(UpdateCheck::Available {
            current_version: site.template_version,
            latest_version: template.version,
            report,
        })
    }

    /// Pull the template's current version into a site's draft.
    ///
    /// `accepted_changes` lists the change paths the user selected. The
    /// selection is not consulted yet: every addition in the report is
    /// applied.
    pub fn apply_update(&self, site_id: &str, accepted_changes: &[String]) -> SdkResult<AppliedUpdate> {
        let mut site = self.load_site(site_id)?;
        let template = self.load_template(&site.template_id)?;

        if template.version == site.template_version {
            return Err(SdkError::VersionUnchanged(template.version));
        }

        let report = compare(
            &site.draft_content,
            &template.config,
            &site.template_version,
            &template.version,
        );
        debug!(
            site = %site.site_id,
            selected = accepted_changes.len(),
            offered = report.total_changes(),
            "applying all additions regardless of selection"
        );
        let merged = apply_migration_with(&self.merge, &site.draft_content, &template.config, &report);

        let previous_version = std::mem::replace(&mut site.template_version, template.version);
        site.draft_content = merged;
        site.updated_at = Utc::now();
        self.store.update_site(&site)?;

        info!(
            site = %site.site_id,
            from = %previous_version,
            to = %site.template_version,
            changes = report.total_changes(),
            "template update applied"
        );
        Ok(AppliedUpdate {
            site_id: site.site_id,
            previous_version,
            new_version: site.template_version,
            applied_changes: report.total_changes(),
        })
    }

    // ---- Template versions ----

    /// Publish a new version of a template.
    ///
    /// The current config is archived, and the changelog entry for the new
    /// version is generated by comparing the old config against the new one.
    pub fn publish_template_version(
        &self,
        template_id: &str,
        version: &str,
        config: ConfigTree,
    ) -> SdkResult<ChangelogEntry> {
        let mut template = self.load_template(template_id)?;
        if template.version == version {
            return Err(SdkError::VersionUnchanged(version.to_string()));
        }

        let now = Utc::now();
        let report = compare(&template.config, &config, &template.version, version);
        let entry = ChangelogEntry {
            version: version.to_string(),
            date: now,
            changes: report.into_changes(),
        };

        let old_config = std::mem::replace(&mut template.config, config);
        let old_version = std::mem::replace(&mut template.version, version.to_string());
        template.previous_versions.push(PreviousVersion {
            version: old_version.clone(),
            config: old_config,
            created_at: now,
        });
        template.changelog.push(entry.clone());
        self.store.update_template(&template)?;

        info!(
            template = %template.id,
            from = %old_version,
            to = %version,
            changes = entry.changes.len(),
            "template version published"
        );
        Ok(entry)
    }

    /// Current version, changelog, and archived versions of a template.
    pub fn template_versions(&self, template_id: &str) -> SdkResult<VersionHistory> {
        let template = self.load_template(template_id)?;
        Ok(VersionHistory {
            current_version: template.version,
            changelog: template.changelog,
            previous_versions: template
                .previous_versions
                .into_iter()
                .map(|v| ArchivedVersion {
                    version: v.version,
                    created_at: v.created_at,
                })
                .collect(),
        })
    }

    // ---- Internal ----

    fn load_site(&self, site_id: &str) -> SdkResult<UserSite> {
        self.store
            .get_site(site_id)?
            .ok_or_else(|| SdkError::SiteNotFound(site_id.to_string()))
    }

    fn load_template(&self, template_id: &str) -> SdkResult<Template> {
        self.store
            .get_template(template_id)?
            .ok_or_else(|| SdkError::TemplateNotFound(template_id.to_string()))
    }
}

impl<S> std::fmt::Debug for Stencil<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stencil").field("merge", &self.merge).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_store::InMemoryStore;
    use stencil_types::Page;

    fn setup() -> Stencil<InMemoryStore> {
        let store = InMemoryStore::new();
        let template = Template::new(
            "school",
            "School 1",
            "1.0.0",
            ConfigTree::with_pages(vec![Page::new("p1", "index", "Home")]),
        );
        store.insert_template(&template).unwrap();
        Stencil::new(store)
    }

    #[test]
    fn create_site_clones_template() {
        let stencil = setup();
        let site = stencil.create_site("school", None).unwrap();

        assert!(site.site_id.starts_with("school-1-"));
        assert_eq!(site.name, "School 1");
        assert_eq!(site.template_version, "1.0.0");
        assert_eq!(site.draft_content.pages.len(), 1);
        assert_eq!(stencil.store().site_count(), 1);
    }

    #[test]
    fn create_site_with_custom_name() {
        let stencil = setup();
        let site = stencil.create_site("school", Some("Sunrise Academy")).unwrap();
        assert_eq!(site.name, "Sunrise Academy");
        assert!(site.site_id.starts_with("sunrise-academy-"));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let stencil = setup();
        assert!(matches!(
            stencil.create_site("nope", None),
            Err(SdkError::TemplateNotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            stencil.check_update("ghost"),
            Err(SdkError::SiteNotFound(id)) if id == "ghost"
        ));
    }

    #[test]
    fn same_version_is_up_to_date() {
        let stencil = setup();
        let site = stencil.create_site("school", None).unwrap();

        let check = stencil.check_update(&site.site_id).unwrap();
        assert_eq!(
            check,
            UpdateCheck::UpToDate {
                current_version: "1.0.0".into()
            }
        );
        assert!(matches!(
            stencil.apply_update(&site.site_id, &[]),
            Err(SdkError::VersionUnchanged(v)) if v == "1.0.0"
        ));
    }

    #[test]
    fn republishing_same_version_rejected() {
        let stencil = setup();
        let err = stencil
            .publish_template_version("school", "1.0.0", ConfigTree::default())
            .unwrap_err();
        assert!(matches!(err, SdkError::VersionUnchanged(_)));
    }
}
