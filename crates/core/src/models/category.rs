use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::EntryKind;

fn default_color() -> String {
    "#000000".to_string()
}

fn default_icon() -> String {
    "default".to_string()
}

/// A user-owned label for transactions.
///
/// `kind` classifies the category itself and is independent of the kind of
/// any transaction filed under it. `color` and `icon` are presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,

    /// Owning user
    pub owner: Uuid,

    /// Display name, unique per owner
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_icon")]
    pub icon: String,
}

impl Category {
    pub fn new(owner: Uuid, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into().trim().to_string(),
            kind,
            color: default_color(),
            icon: default_icon(),
        }
    }

    /// Builder-style presentation override.
    pub fn with_style(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = color.into();
        self.icon = icon.into();
        self
    }
}
