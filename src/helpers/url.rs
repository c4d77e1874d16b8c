//! URL and slug helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the canonical origin
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.origin(), url_for(config, path))
}

/// Like [`url_for`], but leaves absolute URLs (`https://...`, `//cdn...`)
/// untouched
pub fn href_for(config: &SiteConfig, path: &str) -> String {
    if path.contains("://") || path.starts_with("//") {
        path.to_string()
    } else {
        url_for(config, path)
    }
}

/// Map a tag to its kebab-case slug.
///
/// Letter case and whitespace are folded, so `"Rust Lang"`, `" rust  lang "`
/// and `"RUST LANG"` all give `"rust-lang"`. A tag with no alphanumeric
/// content gives the empty slug.
pub fn tag_slug(tag: &str) -> String {
    slug::slugify(tag.trim())
}

/// Route of the listing page for a tag
///
/// # Examples
/// ```ignore
/// tag_url(&config, "Gatsby") // -> "/tag/gatsby/"
/// ```
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(config, &format!("{}/{}/", config.tag_dir, tag_slug(tag)))
}
