//! Change records: one detected difference between two config trees.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// What happened to a node between the old and new tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        };
        f.write_str(s)
    }
}

/// Which part of the tree a change belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Page,
    Section,
    Theme,
    Navigation,
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Theme => "theme",
            Self::Navigation => "navigation",
        };
        f.write_str(s)
    }
}

/// Structured locator addressing exactly one node of a config tree.
///
/// Rendered and parsed as dotted strings:
///
/// - `pages.<pageId>`
/// - `pages.<pageId>.sections.<sectionId>`
/// - `theme.color`, `theme.font`
/// - `navigation.<href>`
///
/// Page and section ids are escaped so the string form always parses back to
/// the same path: `%` is written as `%25` and `.` as `%2E`. The `href` is the
/// last component and is written verbatim. Empty ids are allowed.
///
/// # Examples
///
/// ```
/// use stencil_types::ChangePath;
///
/// let path: ChangePath = "pages.home.sections.hero".parse().unwrap();
/// assert_eq!(path, ChangePath::section("home", "hero"));
/// assert_eq!(path.to_string(), "pages.home.sections.hero");
///
/// let dotted = ChangePath::page("faq.sections.v2");
/// assert_eq!(dotted.to_string(), "pages.faq%2Esections%2Ev2");
/// assert_eq!(dotted.to_string().parse::<ChangePath>().unwrap(), dotted);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChangePath {
    Page { page_id: String },
    Section { page_id: String, section_id: String },
    ThemeColor,
    ThemeFont,
    Navigation { href: String },
}

const PAGES_PREFIX: &str = "pages.";
const SECTIONS_PREFIX: &str = "sections.";
const NAVIGATION_PREFIX: &str = "navigation.";
const THEME_COLOR: &str = "theme.color";
const THEME_FONT: &str = "theme.font";

impl ChangePath {
    pub fn page(page_id: impl Into<String>) -> Self {
        Self::Page {
            page_id: page_id.into(),
        }
    }

    pub fn section(page_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self::Section {
            page_id: page_id.into(),
            section_id: section_id.into(),
        }
    }

    pub fn navigation(href: impl Into<String>) -> Self {
        Self::Navigation { href: href.into() }
    }

    /// The category of node this path addresses.
    pub fn category(&self) -> ChangeCategory {
        match self {
            Self::Page { .. } => ChangeCategory::Page,
            Self::Section { .. } => ChangeCategory::Section,
            Self::ThemeColor | Self::ThemeFont => ChangeCategory::Theme,
            Self::Navigation { .. } => ChangeCategory::Navigation,
        }
    }
}

fn escape_segment(id: &str) -> Cow<'_, str> {
    if id.contains(['%', '.']) {
        Cow::Owned(id.replace('%', "%25").replace('.', "%2E"))
    } else {
        Cow::Borrowed(id)
    }
}

/// Inverse of [`escape_segment`]. Raw dots and unknown escapes are rejected.
fn unescape_segment(segment: &str) -> Option<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        match c {
            '.' => return None,
            '%' => match (chars.next(), chars.next()) {
                (Some('2'), Some('5')) => out.push('%'),
                (Some('2'), Some('E')) => out.push('.'),
                _ => return None,
            },
            c => out.push(c),
        }
    }
    Some(out)
}

impl fmt::Display for ChangePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { page_id } => write!(f, "{PAGES_PREFIX}{}", escape_segment(page_id)),
            Self::Section {
                page_id,
                section_id,
            } => write!(
                f,
                "{PAGES_PREFIX}{}.{SECTIONS_PREFIX}{}",
                escape_segment(page_id),
                escape_segment(section_id)
            ),
            Self::ThemeColor => f.write_str(THEME_COLOR),
            Self::ThemeFont => f.write_str(THEME_FONT),
            Self::Navigation { href } => write!(f, "{NAVIGATION_PREFIX}{href}"),
        }
    }
}

impl FromStr for ChangePath {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        let invalid = || TypeError::InvalidPath(s.to_string());

        match s {
            THEME_COLOR => return Ok(Self::ThemeColor),
            THEME_FONT => return Ok(Self::ThemeFont),
            _ => {}
        }

        if let Some(href) = s.strip_prefix(NAVIGATION_PREFIX) {
            return Ok(Self::navigation(href));
        }

        let rest = s.strip_prefix(PAGES_PREFIX).ok_or_else(invalid)?;
        match rest.split_once('.') {
            None => unescape_segment(rest).map(Self::page).ok_or_else(invalid),
            Some((page, tail)) => {
                let section = tail.strip_prefix(SECTIONS_PREFIX).ok_or_else(invalid)?;
                let page_id = unescape_segment(page).ok_or_else(invalid)?;
                let section_id = unescape_segment(section).ok_or_else(invalid)?;
                Ok(Self::section(page_id, section_id))
            }
        }
    }
}

impl From<ChangePath> for String {
    fn from(path: ChangePath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for ChangePath {
    type Error = TypeError;

    fn try_from(value: String) -> TypeResult<Self> {
        value.parse()
    }
}

/// A single detected difference.
///
/// The category always agrees with the path. A serialized record whose
/// category disagrees is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RecordWire")]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub category: ChangeCategory,
    pub path: ChangePath,
    /// Human-readable summary.
    pub description: String,
    /// Whether a human decision is expected before adopting the change.
    pub requires_action: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_description: Option<String>,
}

impl ChangeRecord {
    /// Create a record. The category is taken from the path.
    pub fn new(kind: ChangeKind, path: ChangePath, description: impl Into<String>) -> Self {
        Self {
            kind,
            category: path.category(),
            path,
            description: description.into(),
            requires_action: false,
            action_description: None,
        }
    }

    /// Mark the record as needing a decision, with guidance for the user.
    pub fn requiring_action(mut self, action: impl Into<String>) -> Self {
        self.requires_action = true;
        self.action_description = Some(action.into());
        self
    }

    /// Attach guidance without requiring a decision.
    pub fn with_note(mut self, action: impl Into<String>) -> Self {
        self.action_description = Some(action.into());
        self
    }

    pub fn is_addition(&self) -> bool {
        self.kind == ChangeKind::Added
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    #[serde(rename = "type")]
    kind: ChangeKind,
    category: ChangeCategory,
    path: ChangePath,
    description: String,
    requires_action: bool,
    #[serde(default)]
    action_description: Option<String>,
}

impl TryFrom<RecordWire> for ChangeRecord {
    type Error = TypeError;

    fn try_from(wire: RecordWire) -> TypeResult<Self> {
        if wire.category != wire.path.category() {
            return Err(TypeError::CategoryMismatch {
                category: wire.category,
                path: wire.path.to_string(),
            });
        }
        Ok(Self {
            kind: wire.kind,
            category: wire.category,
            path: wire.path,
            description: wire.description,
            requires_action: wire.requires_action,
            action_description: wire.action_description,
        })
    }
}
