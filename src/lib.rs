//! blog-rs: a static blog generator
//!
//! Markdown posts, standalone pages and a CV are loaded from the site
//! directory, linked into a chronological sequence, rendered either in full
//! or as teasers, and written out as static HTML with embedded Tera
//! templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod render;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::DocumentKind;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog site on disk
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open the site in `base_dir` with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            public_dir,
        }
    }

    /// Directory holding the Markdown sources of one kind
    pub fn content_dir(&self, kind: DocumentKind) -> PathBuf {
        let dir = match kind {
            DocumentKind::Post => &self.config.posts_dir,
            DocumentKind::Page => &self.config.pages_dir,
            DocumentKind::Cv => &self.config.cv_dir,
        };
        self.base_dir.join(dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.public_dir, tmp.path().join("public"));
        assert_eq!(blog.content_dir(DocumentKind::Cv), tmp.path().join("cv"));
    }

    #[test]
    fn test_new_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "title: Test\npublic_dir: dist\nposts_dir: content/posts\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.config.title, "Test");
        assert_eq!(blog.public_dir, tmp.path().join("dist"));
        assert_eq!(
            blog.content_dir(DocumentKind::Post),
            tmp.path().join("content/posts")
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "posts_per_page: [not a number]\n").unwrap();
        assert!(Blog::new(tmp.path()).is_err());
    }
}
