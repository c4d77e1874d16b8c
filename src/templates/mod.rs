//! Built-in theme templates using the Tera template engine
//!
//! The templates are embedded in the binary. Autoescaping is off: every
//! text field goes through the `esc` filter, and the one field that does
//! not is a document's body, which is trusted markup from the Markdown
//! renderer.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{MenuItem, SiteConfig};
use crate::helpers::{href_for, html_escape, url_for};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("macros.html", include_str!("theme/macros.html")),
            ("post.html", include_str!("theme/post.html")),
            ("index.html", include_str!("theme/index.html")),
            ("tag.html", include_str!("theme/tag.html")),
            (
                "partials/comments.html",
                include_str!("theme/partials/comments.html"),
            ),
        ])?;

        tera.register_filter("esc", esc_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape HTML special characters
fn esc_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let escaped = match value {
        tera::Value::String(s) => html_escape(s),
        tera::Value::Null => String::new(),
        other => html_escape(&other.to_string()),
    };
    Ok(tera::Value::String(escaped))
}

/// Site-wide chrome shared by every page
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub logo_text: String,
    pub copyrights: String,
    pub default_theme: String,
    pub root: String,
    pub logo: Option<LogoData>,
    /// Entries shown inline in the header
    pub menu: Vec<MenuItem>,
    /// Entries collapsed under `menu_more_text`
    pub menu_more: Vec<MenuItem>,
    pub menu_more_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoData {
    pub src: String,
    pub alt: String,
}

impl SiteData {
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut menu: Vec<MenuItem> = config
            .main_menu
            .iter()
            .map(|item| MenuItem {
                title: item.title.clone(),
                path: href_for(config, &item.path),
            })
            .collect();
        let menu_more = menu.split_off(config.show_menu_items.min(menu.len()));

        let logo = config.logo.src.trim();
        let logo = (!logo.is_empty()).then(|| LogoData {
            src: href_for(config, logo),
            alt: config.logo.alt.clone(),
        });

        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            logo_text: config.logo_text.clone(),
            copyrights: config.copyrights.clone(),
            default_theme: config.default_theme.clone(),
            root: url_for(config, "/"),
            logo,
            menu,
            menu_more,
            menu_more_text: config.menu_more_text.clone(),
        }
    }
}

/// `<head>` metadata of one page
#[derive(Debug, Clone, Serialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    /// Absolute URL of the page
    pub url: String,
    /// Absolute URL of the page's image
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    pub per_page: usize,
    pub total: usize,
    pub current: usize,
    pub current_url: String,
    /// Newer posts
    pub prev_link: Option<String>,
    /// Older posts
    pub next_link: Option<String>,
}
