//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub copyrights: String,
    /// Optional logo image shown before `logo_text`
    #[serde(default)]
    pub logo: LogoConfig,
    pub logo_text: String,
    pub default_theme: String,

    // URL
    /// Canonical origin, used for absolute URLs (comments, Open Graph)
    pub url: String,
    pub root: String,

    // Directory
    pub posts_dir: String,
    pub pages_dir: String,
    pub cv_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    /// Moment.js style format used for display dates
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Home page
    pub posts_per_page: usize,
    #[serde(default)]
    pub main_menu: Vec<MenuItem>,
    /// Menu entries shown inline; the rest collapse under `menu_more_text`
    pub show_menu_items: usize,
    pub menu_more_text: String,

    // Comments
    #[serde(default)]
    pub comments: CommentsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            copyrights: String::new(),
            logo: LogoConfig::default(),
            logo_text: "blog".to_string(),
            default_theme: "light".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            posts_dir: "posts".to_string(),
            pages_dir: "pages".to_string(),
            cv_dir: "cv".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tag".to_string(),

            date_format: "DD MMMM YYYY".to_string(),
            highlight: HighlightConfig::default(),

            posts_per_page: 5,
            main_menu: vec![MenuItem {
                title: "CV".to_string(),
                path: "/cv".to_string(),
            }],
            show_menu_items: 3,
            menu_more_text: "Show more".to_string(),

            comments: CommentsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Canonical origin without a trailing slash
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Main menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub path: String,
}

/// Logo image; an empty `src` means text only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub src: String,
    pub alt: String,
}

/// Comment provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Provider account identifier; an empty value disables the widget script
    pub shortname: String,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
