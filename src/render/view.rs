//! Display tree produced by the page renderer and consumed by templates

use serde::Serialize;

use super::comments::CommentThread;
use super::navigation::Navigation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// A tag link; `slug` is also the link's key within the list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagLink {
    pub name: String,
    pub slug: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverView {
    pub src: String,
    pub alt: String,
}

/// One rendered document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub title: String,
    /// Set in teaser mode, where the title links to the document
    pub title_href: Option<String>,
    /// Display date
    pub date: String,
    /// Machine readable date for `<time datetime>`
    pub datetime: String,
    pub author: Option<String>,
    pub tags: Vec<TagLink>,
    pub cover: Option<CoverView>,
    pub body: BodyView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BodyView {
    Teaser {
        excerpt: String,
        read_more: Link,
    },
    Full {
        /// Trusted, pre-sanitised markup; templates emit it unescaped
        html: String,
        navigation: Navigation,
        comments: CommentThread,
    },
}

impl PostView {
    pub fn is_teaser(&self) -> bool {
        matches!(self.body, BodyView::Teaser { .. })
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        match &self.body {
            BodyView::Full { navigation, .. } => Some(navigation),
            BodyView::Teaser { .. } => None,
        }
    }

    pub fn comments(&self) -> Option<&CommentThread> {
        match &self.body {
            BodyView::Full { comments, .. } => Some(comments),
            BodyView::Teaser { .. } => None,
        }
    }
}
