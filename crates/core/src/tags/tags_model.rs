//! Tag domain models.

use serde::{Deserialize, Serialize};

use super::tags_errors::TagError;
use crate::Result;

pub const DEFAULT_BACKGROUND_COLOR: &str = "ffffff";
pub const DEFAULT_FOREGROUND_COLOR: &str = "000000";

/// A user-defined classification name. Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub background_color: String,
    pub foreground_color: String,
}

/// Input model for registering a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub foreground_color: Option<String>,
}

impl NewTag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            background_color: None,
            foreground_color: None,
        }
    }

    /// Validates the input and fills in default colors.
    pub fn into_tag(self) -> Result<Tag> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TagError::EmptyName.into());
        }
        let background_color = checked_color(
            "background",
            self.background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        )?;
        let foreground_color = checked_color(
            "foreground",
            self.foreground_color
                .unwrap_or_else(|| DEFAULT_FOREGROUND_COLOR.to_string()),
        )?;
        Ok(Tag {
            name,
            description: self.description,
            background_color,
            foreground_color,
        })
    }
}

fn checked_color(field: &'static str, value: String) -> Result<String> {
    if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(value.to_ascii_lowercase())
    } else {
        Err(TagError::InvalidColor { field, value }.into())
    }
}
