//! Site configuration trees.
//!
//! A [`ConfigTree`] is one version of a site's structure: either the canonical
//! template or a user's cloned instance. Every type here is a plain value:
//! cloning produces a fully independent copy, and nothing holds references
//! into another tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque section properties. Copied verbatim, never interpreted.
pub type Props = serde_json::Map<String, Value>;

/// Named theme tokens (`primary`, `accent`, ...), kept in document order.
pub type ThemeSlots = serde_json::Map<String, Value>;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Root document describing one version of a site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTree {
    /// Ordered page list. Absent in the source document means empty.
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Site-wide theme. `None` suppresses theme comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSpec>,
    /// Navigation entries. `None` suppresses navigation comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Vec<NavigationItem>>,
    /// Opaque footer payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Value>,
}

impl ConfigTree {
    /// Create a tree with the given pages and nothing else.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// First page with the given id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Mutable access to the first page with the given id.
    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Returns `true` if any page carries the given id.
    pub fn contains_page(&self, id: &str) -> bool {
        self.page(id).is_some()
    }

    /// Navigation entries, or an empty slice when absent.
    pub fn navigation_items(&self) -> &[NavigationItem] {
        self.navigation.as_deref().unwrap_or(&[])
    }
}

/// A single page of a site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Stable key, unique within a tree.
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Page is backed by user-managed collection items rather than static sections.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dynamic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_config: Option<DynamicConfig>,
    /// Transient marker set when a migration introduced this page.
    #[serde(default, rename = "_isNew", skip_serializing_if = "is_false")]
    pub is_new: bool,
}

impl Page {
    /// Create a page with no sections.
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Replace the section list.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// First section with the given id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Returns `true` if any section carries the given id.
    pub fn contains_section(&self, id: &str) -> bool {
        self.section(id).is_some()
    }
}

/// Search-engine metadata for a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

/// Describes a page backed by a user-managed collection (articles, products).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_template: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_template: Option<Value>,
}

/// One content block on a page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable key, unique within its page.
    pub id: String,
    /// Rendering tag. Opaque to the engine.
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default, rename = "_isNew", skip_serializing_if = "is_false")]
    pub is_new: bool,
}

impl Section {
    /// Create a section with empty props.
    pub fn new(id: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section_type: section_type.into(),
            ..Default::default()
        }
    }

    /// Set a single property.
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }
}

/// Site-wide visual settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpec {
    /// Named color slots (`primary`, `accent`, ...).
    #[serde(default)]
    pub color: ThemeSlots,
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "ThemeSlots::is_empty")]
    pub font_size: ThemeSlots,
    #[serde(default, skip_serializing_if = "ThemeSlots::is_empty")]
    pub font_weight: ThemeSlots,
}

impl ThemeSpec {
    /// Build a theme from color slot pairs.
    pub fn with_colors<K, V>(colors: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            color: colors
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
            ..Default::default()
        }
    }

    /// Set the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// A navigation link. Identified by its `href`; there is no separate id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
