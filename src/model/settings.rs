use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default: the name of the app
fn default_title() -> String {
    "lol task".to_string()
}

/// Default: the ballot style
fn default_bullet_style() -> String {
    "ballot".to_string()
}

/// User settings from config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Shown centered in the top border
    #[serde(default = "default_title")]
    pub title: String,
    /// Name of the bullet style used for task icons
    #[serde(default = "default_bullet_style", alias = "bulletStyleName")]
    pub bullet_style: String,
    /// Theme overrides, color name to `#RRGGBB`
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, String>,
    /// Keys this version does not know about, written back untouched
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: default_title(),
            bullet_style: default_bullet_style(),
            colors: IndexMap::new(),
            extra: toml::Table::new(),
        }
    }
}
