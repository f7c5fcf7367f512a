use serde_json::json;
use stencil_merge::MergeConfig;
use stencil_sdk::{SdkError, Stencil, UpdateCheck};
use stencil_store::{InMemoryStore, SiteStore, Template, TemplateStore};
use stencil_types::{
    ChangeCategory, ChangeKind, ChangePath, ConfigTree, NavigationItem, Page, Section, ThemeSpec,
};

fn v1_config() -> ConfigTree {
    serde_json::from_value(json!({
        "pages": [{
            "id": "p1",
            "slug": "index",
            "title": "Home | School1",
            "seo": { "description": "Welcome to our school" },
            "sections": [
                { "id": "s1", "type": "school1navbar", "props": { "logoText": "KIDS" } },
                { "id": "s2", "type": "school1hero", "props": { "headline": "For Your Child's Bright Future" } }
            ]
        }],
        "theme": {
            "color": { "primary": "#ff6b6b", "secondary": "#4ecdc4" },
            "font": "Poppins"
        },
        "navigation": [
            { "label": "Home", "href": "./" },
            { "label": "About Us", "href": "./about" }
        ],
        "footer": { "copyright": "School1" }
    }))
    .unwrap()
}

fn v2_config() -> ConfigTree {
    let mut config = v1_config();
    config.pages[0]
        .sections
        .push(Section::new("s3", "school1stats").with_prop("stats", json!([])));
    config.pages.push(
        Page::new("p2", "contact", "Contact").with_sections(vec![Section::new("c1", "contactform")]),
    );
    let theme = config.theme.as_mut().unwrap();
    theme.color.insert("primary".into(), "#000000".into());
    theme.color.insert("accent".into(), "#ffe66d".into());
    theme.font = Some("Nunito".into());
    config
        .navigation
        .as_mut()
        .unwrap()
        .push(NavigationItem::new("Contact", "./contact"));
    config
}

fn setup() -> Stencil<InMemoryStore> {
    let store = InMemoryStore::new();
    let template = Template::new("school1", "School 1", "1.0.0", v1_config())
        .with_category("education")
        .with_description("Playful primary school landing page");
    store.insert_template(&template).unwrap();
    Stencil::new(store)
}

fn customize(stencil: &Stencil<InMemoryStore>, site_id: &str) {
    let mut draft = stencil.store().get_site(site_id).unwrap().unwrap().draft_content;
    draft.pages[0].title = "Sunrise Academy".into();
    draft.pages[0].sections[1]
        .props
        .insert("headline".into(), json!("Learning every day"));
    draft.pages[0].sections.push(Section::new("mine", "richtext"));
    draft.theme.as_mut().unwrap().color.insert("primary".into(), "#123456".into());
    stencil.update_draft(site_id, draft).unwrap();
}

#[test]
fn full_upgrade_cycle() {
    let stencil = setup();
    let site = stencil.create_site("school1", Some("Sunrise Academy")).unwrap();
    customize(&stencil, &site.site_id);

    let entry = stencil
        .publish_template_version("school1", "1.1.0", v2_config())
        .unwrap();
    assert_eq!(entry.version, "1.1.0");
    assert!(!entry.changes.is_empty());

    let check = stencil.check_update(&site.site_id).unwrap();
    let report = check.report().expect("update should be available").clone();
    assert_eq!(report.from_version, "1.0.0");
    assert_eq!(report.to_version, "1.1.0");

    let paths: Vec<String> = report.changes().iter().map(|c| c.path.to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "pages.p2",
            "pages.p1.sections.s3",
            "pages.p1.sections.mine",
            "theme.color",
            "theme.font",
            "navigation../contact",
        ]
    );
    let mine = report.find(&ChangePath::section("p1", "mine")).unwrap();
    assert_eq!(mine.kind, ChangeKind::Removed);
    assert!(!mine.requires_action);

    // No selection made: every addition is still applied.
    let applied = stencil.apply_update(&site.site_id, &[]).unwrap();
    assert_eq!(applied.previous_version, "1.0.0");
    assert_eq!(applied.new_version, "1.1.0");
    assert_eq!(applied.applied_changes, report.total_changes());

    let site = stencil.store().get_site(&site.site_id).unwrap().unwrap();
    assert_eq!(site.template_version, "1.1.0");

    let draft = &site.draft_content;
    let home = draft.page("p1").unwrap();
    assert_eq!(home.title, "Sunrise Academy");
    assert_eq!(home.section("s2").unwrap().props["headline"], json!("Learning every day"));
    assert!(home.section("mine").is_some());
    assert!(home.section("s3").unwrap().is_new);
    assert!(draft.page("p2").unwrap().is_new);

    let theme = draft.theme.as_ref().unwrap();
    assert_eq!(theme.color["primary"], "#123456");
    assert_eq!(theme.color["accent"], "#ffe66d");
    assert_eq!(theme.font.as_deref(), Some("Poppins"));

    let hrefs: Vec<&str> = draft.navigation_items().iter().map(|n| n.href.as_str()).collect();
    assert_eq!(hrefs, vec!["./", "./about"]);

    assert!(matches!(
        stencil.check_update(&site.site_id).unwrap(),
        UpdateCheck::UpToDate { current_version } if current_version == "1.1.0"
    ));
}

#[test]
fn selection_does_not_limit_what_is_applied() {
    let stencil = setup();
    let site = stencil.create_site("school1", None).unwrap();
    stencil
        .publish_template_version("school1", "1.1.0", v2_config())
        .unwrap();

    let only_page = vec!["pages.p2".to_string()];
    stencil.apply_update(&site.site_id, &only_page).unwrap();

    let draft = stencil.store().get_site(&site.site_id).unwrap().unwrap().draft_content;
    assert!(draft.contains_page("p2"));
    assert!(draft.page("p1").unwrap().contains_section("s3"));
}

#[test]
fn unmarked_merge_config_is_honored() {
    let store = InMemoryStore::new();
    store
        .insert_template(&Template::new("school1", "School 1", "1.0.0", v1_config()))
        .unwrap();
    let stencil = Stencil::new(store).with_merge_config(MergeConfig::unmarked());

    let site = stencil.create_site("school1", None).unwrap();
    stencil
        .publish_template_version("school1", "2.0.0", v2_config())
        .unwrap();
    stencil.apply_update(&site.site_id, &[]).unwrap();

    let draft = stencil.store().get_site(&site.site_id).unwrap().unwrap().draft_content;
    assert!(!draft.page("p2").unwrap().is_new);
}

#[test]
fn version_history_is_recorded() {
    let stencil = setup();
    stencil
        .publish_template_version("school1", "1.1.0", v2_config())
        .unwrap();

    let history = stencil.template_versions("school1").unwrap();
    assert_eq!(history.current_version, "1.1.0");
    assert_eq!(history.previous_versions.len(), 1);
    assert_eq!(history.previous_versions[0].version, "1.0.0");
    assert_eq!(history.changelog.len(), 1);

    let changes = &history.changelog[0].changes;
    assert!(changes
        .iter()
        .any(|c| c.category == ChangeCategory::Page && c.path == ChangePath::page("p2")));
    assert!(changes.iter().any(|c| c.path == ChangePath::ThemeFont));

    let template = stencil.store().get_template("school1").unwrap().unwrap();
    assert_eq!(template.previous_versions[0].config, v1_config());
    assert_eq!(template.config, v2_config());
}

#[test]
fn sites_share_a_template_without_interference() {
    let stencil = setup();
    let a = stencil.create_site("school1", Some("Alpha")).unwrap();
    let b = stencil.create_site("school1", Some("Beta")).unwrap();
    customize(&stencil, &a.site_id);
    stencil
        .publish_template_version("school1", "1.1.0", v2_config())
        .unwrap();

    std::thread::scope(|scope| {
        let ha = scope.spawn(|| stencil.apply_update(&a.site_id, &[]));
        let hb = scope.spawn(|| stencil.check_update(&b.site_id));
        ha.join().unwrap().unwrap();
        assert!(hb.join().unwrap().unwrap().is_available());
    });

    let template = stencil.store().get_template("school1").unwrap().unwrap();
    assert_eq!(template.config, v2_config());

    let beta = stencil.store().get_site(&b.site_id).unwrap().unwrap();
    assert_eq!(beta.draft_content, v1_config());
    assert_eq!(beta.template_version, "1.0.0");
}

#[test]
fn theme_only_template_change() {
    let stencil = setup();
    let site = stencil.create_site("school1", None).unwrap();

    let mut v2 = v1_config();
    v2.theme = Some(ThemeSpec::with_colors([("primary", "#ff6b6b"), ("secondary", "#4ecdc4"), ("text", "#222")]).with_font("Poppins"));
    stencil.publish_template_version("school1", "1.0.1", v2).unwrap();

    let report = stencil.check_update(&site.site_id).unwrap().report().cloned().unwrap();
    assert_eq!(report.total_changes(), 1);
    assert_eq!(report.changes_requiring_action(), 0);
}

#[test]
fn missing_template_surfaces_as_error() {
    let stencil = setup();
    let site = stencil.create_site("school1", None).unwrap();

    let mut orphan = stencil.store().get_site(&site.site_id).unwrap().unwrap();
    orphan.template_id = "deleted".into();
    stencil.store().update_site(&orphan).unwrap();

    assert!(matches!(
        stencil.check_update(&site.site_id),
        Err(SdkError::TemplateNotFound(id)) if id == "deleted"
    ));
}
