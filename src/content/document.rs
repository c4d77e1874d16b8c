//! Document model shared by posts, pages and the CV

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Which content collection a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Post,
    Page,
    /// Singleton curriculum vitae, never listed
    Cv,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Post, DocumentKind::Page, DocumentKind::Cv];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Post => "post",
            DocumentKind::Page => "page",
            DocumentKind::Cv => "cv",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a cover image asset.
///
/// `src` is the public URL the page links to; `source` is the file the
/// generator copies there, absent for remote images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverImage {
    pub src: String,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CoverImage {
    /// Public directory cover images are copied into
    pub const STATIC_DIR: &'static str = "static";

    /// Resolve a front-matter reference against the directory of the
    /// Markdown file that declared it.
    ///
    /// Local images land under a directory named after the owning document's
    /// route, so two documents may both use `cover.jpg`.
    pub fn resolve(reference: &str, base_dir: &std::path::Path, route: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        if reference.starts_with("http://")
            || reference.starts_with("https://")
            || reference.starts_with("//")
        {
            return Some(Self {
                src: reference.to_string(),
                source: None,
            });
        }

        let source = base_dir.join(reference);
        let file_name = source.file_name()?.to_string_lossy().to_string();
        let scope = match slug::slugify(route) {
            s if s.is_empty() => "index".to_string(),
            s => s,
        };
        Some(Self {
            src: format!("/{}/{}/{}", Self::STATIC_DIR, scope, file_name),
            source: Some(source),
        })
    }
}

/// One piece of content, immutable once loaded
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Source path relative to the site directory
    pub id: String,

    pub kind: DocumentKind,

    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Canonical route, unique per kind. Doubles as the comment thread id.
    pub path: String,

    pub author: Option<String>,

    /// Tags in authored order; empty when the document has none
    pub tags: Vec<String>,

    pub cover_image: Option<CoverImage>,

    /// Authored excerpt from front-matter
    pub excerpt: Option<String>,

    /// Plain-text excerpt derived from the body
    pub auto_excerpt: String,

    /// Rendered body. Pre-sanitised HTML from the Markdown renderer.
    pub body: String,
}

impl Document {
    /// Create a document with the required fields set and everything
    /// optional left empty
    pub fn new(kind: DocumentKind, title: &str, path: &str, date: DateTime<Local>) -> Self {
        Self {
            id: format!("{}:{}", kind, path),
            kind,
            title: title.to_string(),
            date,
            path: path.to_string(),
            author: None,
            tags: Vec::new(),
            cover_image: None,
            excerpt: None,
            auto_excerpt: String::new(),
            body: String::new(),
        }
    }

    /// Authored excerpt if present, otherwise the derived one
    pub fn summary(&self) -> &str {
        self.excerpt
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(&self.auto_excerpt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_summary_prefers_authored_excerpt() {
        let mut doc = Document::new(DocumentKind::Post, "T", "/t", Local::now());
        doc.auto_excerpt = "Derived".to_string();
        assert_eq!(doc.summary(), "Derived");

        doc.excerpt = Some("Authored".to_string());
        assert_eq!(doc.summary(), "Authored");

        doc.excerpt = Some("  ".to_string());
        assert_eq!(doc.summary(), "Derived");
    }

    #[test]
    fn test_cover_image_resolve_local() {
        let cover =
            CoverImage::resolve("../images/hello.jpg", Path::new("/site/posts"), "/hello-world")
                .unwrap();
        assert_eq!(cover.src, "/static/hello-world/hello.jpg");
        assert_eq!(
            cover.source,
            Some(PathBuf::from("/site/posts/../images/hello.jpg"))
        );
    }

    #[test]
    fn test_cover_image_same_file_name_per_document() {
        let a = CoverImage::resolve("cover.jpg", Path::new("/site/posts/a"), "/2020/a").unwrap();
        let b = CoverImage::resolve("cover.jpg", Path::new("/site/posts/b"), "/2021/b").unwrap();
        assert_eq!(a.src, "/static/2020-a/cover.jpg");
        assert_eq!(b.src, "/static/2021-b/cover.jpg");

        let home = CoverImage::resolve("cover.jpg", Path::new("/site/pages"), "/").unwrap();
        assert_eq!(home.src, "/static/index/cover.jpg");
    }

    #[test]
    fn test_cover_image_resolve_remote_and_empty() {
        let cover =
            CoverImage::resolve("https://cdn.example.com/a.png", Path::new("/x"), "/a").unwrap();
        assert_eq!(cover.src, "https://cdn.example.com/a.png");
        assert_eq!(cover.source, None);

        assert_eq!(CoverImage::resolve("  ", Path::new("/x"), "/a"), None);
    }
}
