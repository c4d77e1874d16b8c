//! Content loader - loads posts, pages and the CV from the site directory

use anyhow::Result;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{CoverImage, Document, DocumentKind, FrontMatter, MarkdownRenderer};
use crate::helpers::{prune, strip_html};
use crate::Blog;

/// Length of derived excerpts, in characters
const AUTO_EXCERPT_LENGTH: usize = 140;

/// Everything the loader found, each collection ordered newest first
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub posts: Vec<Document>,
    pub pages: Vec<Document>,
    pub cv: Option<Document>,
}

/// Loads content from the site directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(&blog.config.highlight);
        Self { blog, renderer }
    }

    /// Load every collection
    pub fn load_site(&self) -> Result<SiteContent> {
        let posts = self.load(DocumentKind::Post)?;
        let pages = self.load(DocumentKind::Page)?;

        let mut cvs = self.load(DocumentKind::Cv)?;
        if cvs.len() > 1 {
            tracing::warn!(
                "Found {} CV documents, using the newest ({})",
                cvs.len(),
                cvs[0].id
            );
        }
        let cv = if cvs.is_empty() {
            None
        } else {
            Some(cvs.swap_remove(0))
        };

        Ok(SiteContent { posts, pages, cv })
    }

    /// Load all documents of one kind, sorted by date descending (newest
    /// first). Files that fail to load are logged and skipped, as are
    /// documents whose path is already taken.
    pub fn load(&self, kind: DocumentKind) -> Result<Vec<Document>> {
        let dir = self.blog.content_dir(kind);
        if !dir.exists() {
            tracing::debug!("No {} directory at {:?}", kind, dir);
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_document(kind, path) {
                    Ok(doc) => documents.push(doc),
                    Err(e) => {
                        tracing::warn!("Failed to load {} {:?}: {}", kind, path, e);
                    }
                }
            }
        }

        documents.sort_by(|a, b| b.date.cmp(&a.date));

        let mut seen = HashSet::new();
        documents.retain(|doc| {
            let fresh = seen.insert(doc.path.clone());
            if !fresh {
                tracing::warn!(
                    "Duplicate {} path {}, skipping {}",
                    kind,
                    doc.path,
                    doc.id
                );
            }
            fresh
        });

        tracing::debug!("Loaded {} {} documents", documents.len(), kind);
        Ok(documents)
    }

    /// Load a single document from a file
    fn load_document(&self, kind: DocumentKind, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let title = fm
            .title
            .clone()
            .unwrap_or_else(|| file_stem(path).to_string());

        let route = match fm.path.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => normalize_route(p),
            _ => default_route(kind, path),
        };

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let body_html = self.renderer.render(&full_md)?;
        let auto_excerpt = match excerpt_md {
            Some(md) => prune(&strip_html(&self.renderer.render(&md)?), AUTO_EXCERPT_LENGTH),
            None => prune(&strip_html(&body_html), AUTO_EXCERPT_LENGTH),
        };

        let base_dir = path.parent().unwrap_or(Path::new("."));
        let cover_image = fm
            .cover_image
            .as_deref()
            .and_then(|reference| CoverImage::resolve(reference, base_dir, &route));

        let mut doc = Document::new(kind, &title, &route, date);
        doc.id = path
            .strip_prefix(&self.blog.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        doc.author = fm.author.filter(|a| !a.trim().is_empty());
        doc.tags = fm
            .tags
            .into_iter()
            .filter(|t| !t.trim().is_empty())
            .collect();
        doc.cover_image = cover_image;
        doc.excerpt = fm.excerpt.filter(|e| !e.trim().is_empty());
        doc.auto_excerpt = auto_excerpt;
        doc.body = body_html;

        Ok(doc)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
}

/// Leading slash, no trailing slash (except for the root itself)
fn normalize_route(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    format!("/{}", trimmed)
}

/// Route for a document without a `path` in its front-matter
fn default_route(kind: DocumentKind, path: &Path) -> String {
    let stem = file_stem(path);
    // `foo/index.md` is served at `/foo`
    let name = if stem == "index" {
        path.parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or(stem)
    } else {
        stem
    };

    match kind {
        DocumentKind::Cv => "/cv".to_string(),
        _ => format!("/{}", slug::slugify(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn blog(dir: &TempDir) -> Blog {
        Blog::with_config(dir.path(), SiteConfig::default())
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "posts/older.md",
            "---\ntitle: Older\ndate: 2019-01-01\npath: /older-post\n---\nOld body",
        );
        write(
            tmp.path(),
            "posts/newer.md",
            "---\ntitle: Newer\ndate: 2020-06-01\npath: /newer-post\ntags:\n  - Rust\n---\nNew body",
        );
        write(tmp.path(), "posts/notes.txt", "not markdown");

        let blog = blog(&tmp);
        let posts = ContentLoader::new(&blog).load(DocumentKind::Post).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[0].path, "/newer-post");
        assert_eq!(posts[0].tags, vec!["Rust"]);
        assert_eq!(posts[1].title, "Older");
        assert!(posts[1].body.contains("<p>Old body</p>"));
        assert_eq!(posts[1].id, Path::new("posts").join("older.md").to_string_lossy());
    }

    #[test]
    fn test_auto_excerpt_and_authored_excerpt() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "posts/a.md",
            "---\ntitle: A\ndate: 2020-01-01\nexcerpt: Hand written\n---\nBody **text** here",
        );
        write(
            tmp.path(),
            "posts/b.md",
            "---\ntitle: B\ndate: 2020-01-02\n---\nIntro para.\n\n<!-- more -->\n\nRest of it.",
        );

        let blog = blog(&tmp);
        let posts = ContentLoader::new(&blog).load(DocumentKind::Post).unwrap();
        let b = &posts[0];
        let a = &posts[1];

        assert_eq!(a.excerpt.as_deref(), Some("Hand written"));
        assert_eq!(a.auto_excerpt, "Body text here");
        assert_eq!(b.excerpt, None);
        assert_eq!(b.auto_excerpt, "Intro para.");
        assert!(b.body.contains("Rest of it."));
    }

    #[test]
    fn test_default_routes_and_cover() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "posts/My First Post.md",
            "---\ntitle: First\ndate: 2020-01-01\ncoverImage: ../images/cover.png\n---\nx",
        );
        write(tmp.path(), "pages/about/index.md", "---\ntitle: About\n---\nme");
        write(tmp.path(), "cv/resume.md", "---\ntitle: CV\ndate: 2021-01-01\n---\njobs");

        let blog = blog(&tmp);
        let site = ContentLoader::new(&blog).load_site().unwrap();

        assert_eq!(site.posts[0].path, "/my-first-post");
        let cover = site.posts[0].cover_image.as_ref().unwrap();
        assert_eq!(cover.src, "/static/my-first-post/cover.png");
        assert_eq!(site.pages[0].path, "/about");
        assert_eq!(site.cv.as_ref().unwrap().path, "/cv");
    }

    #[test]
    fn test_duplicate_paths_keep_newest() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "posts/one.md",
            "---\ntitle: One\ndate: 2020-01-01\npath: /same\n---\n",
        );
        write(
            tmp.path(),
            "posts/two.md",
            "---\ntitle: Two\ndate: 2021-01-01\npath: same/\n---\n",
        );

        let blog = blog(&tmp);
        let posts = ContentLoader::new(&blog).load(DocumentKind::Post).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Two");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let blog = blog(&tmp);
        let site = ContentLoader::new(&blog).load_site().unwrap();
        assert!(site.posts.is_empty());
        assert!(site.pages.is_empty());
        assert!(site.cv.is_none());
    }
}
