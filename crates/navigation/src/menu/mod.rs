pub mod catalog;
pub mod resolver;

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry in the static navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Unique path-like identifier (e.g., "/order/list"), stable for the
    /// lifetime of the tree
    pub key: String,
    /// Display text for the sidebar and breadcrumb
    #[serde(default)]
    pub label: String,
    /// Sidebar icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Child entries, in display order; empty for leaves
    #[serde(
        default,
        deserialize_with = "lenient_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Leaf entry without children
    pub fn leaf(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Entry with a nested submenu
    pub fn group(key: &str, label: &str, children: Vec<MenuNode>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: None,
            children,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Deserialize a node list, silently dropping `null` entries.
///
/// Menu definitions coming from JSON may contain null slots (conditionally
/// hidden entries); those are skipped, never matched and never an error.
fn lenient_nodes<'de, D>(deserializer: D) -> Result<Vec<MenuNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<MenuNode>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().collect())
}

/// Parse a whole menu tree from a JSON array, with the same null tolerance
/// at the top level as inside `children`.
pub fn tree_from_json(json: &str) -> Result<Vec<MenuNode>, serde_json::Error> {
    let raw: Vec<Option<MenuNode>> = serde_json::from_str(json)?;
    Ok(raw.into_iter().flatten().collect())
}
