//! Content module - the document model and the loader that produces it

mod document;
mod frontmatter;
pub mod loader;
mod markdown;

pub use document::{CoverImage, Document, DocumentKind};
pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, SiteContent};
pub use markdown::MarkdownRenderer;
