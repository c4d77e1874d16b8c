//! Comment thread binding for the lazily loaded comment widget

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Document;
use crate::helpers::{full_url_for, truncate_chars};

/// Longest thread title the comment provider accepts
pub const THREAD_TITLE_LIMIT: usize = 200;

/// Parameters handed to the comment widget.
///
/// The widget is mounted inert and loads its provider script the first time
/// the mount point scrolls into view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentThread {
    /// Provider account identifier
    pub shortname: String,
    /// Stable thread key; the document path, so threads survive rebuilds
    pub identifier: String,
    pub title: String,
    /// Absolute URL of the document, under the site root
    pub url: String,
}

impl CommentThread {
    pub fn bind(document: &Document, config: &SiteConfig) -> Self {
        Self {
            shortname: config.comments.shortname.clone(),
            identifier: document.path.clone(),
            title: thread_title(&document.title),
            url: full_url_for(config, &document.path),
        }
    }
}

/// Prefix cut to [`THREAD_TITLE_LIMIT`] characters
pub fn thread_title(title: &str) -> String {
    truncate_chars(title, THREAD_TITLE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocumentKind;
    use chrono::Local;

    #[test]
    fn test_bind() {
        let mut config = SiteConfig::default();
        config.url = "https://www.dennis-s.dk/".to_string();
        config.comments.shortname = "dennis-s-dk".to_string();

        let doc = Document::new(DocumentKind::Post, "Hello World", "/hello-world", Local::now());
        let thread = CommentThread::bind(&doc, &config);

        assert_eq!(thread.identifier, "/hello-world");
        assert_eq!(thread.title, "Hello World");
        assert_eq!(thread.url, "https://www.dennis-s.dk/hello-world");
        assert_eq!(thread.shortname, "dennis-s-dk");

        config.root = "/blog/".to_string();
        let thread = CommentThread::bind(&doc, &config);
        assert_eq!(thread.identifier, "/hello-world");
        assert_eq!(thread.url, "https://www.dennis-s.dk/blog/hello-world");
    }

    #[test]
    fn test_title_cap() {
        let long = "x".repeat(250);
        assert_eq!(thread_title(&long), "x".repeat(200));

        let exact = "y".repeat(200);
        assert_eq!(thread_title(&exact), exact);

        let short = "Short title";
        assert_eq!(thread_title(short), short);

        let wide = "é".repeat(201);
        assert_eq!(thread_title(&wide).chars().count(), 200);
    }
}
