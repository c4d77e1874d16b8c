//! Page renderer - maps a render context onto a display tree
//!
//! Rendering is pure and infallible: anything optional that a document lacks
//! (author, tags, cover image, neighbours) is simply left out of the view.
//! Required fields are checked earlier, when the [`RenderContext`] is built.

mod comments;
mod context;
mod navigation;
mod view;

use std::collections::HashSet;

pub use comments::{thread_title, CommentThread, THREAD_TITLE_LIMIT};
pub use context::{NavigationContext, RenderContext, RenderContextError, RenderMode};
pub use navigation::Navigation;
pub use view::{BodyView, CoverView, Link, PostView, TagLink};

use crate::config::SiteConfig;
use crate::content::Document;
use crate::helpers::{date_xml, format_date, href_for, tag_slug, tag_url, url_for};

/// Label of the teaser's link to the full document
pub const READ_MORE_LABEL: &str = "Read more →";

/// Renders posts, pages and the CV
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Render a document in the mode its context selected
    pub fn render(&self, ctx: &RenderContext<'_>) -> PostView {
        let doc = ctx.document;
        let href = url_for(self.config, &doc.path);

        let (title_href, body) = match &ctx.mode {
            RenderMode::Teaser { excerpt } => (
                Some(href.clone()),
                BodyView::Teaser {
                    excerpt: excerpt.clone(),
                    read_more: Link {
                        href,
                        label: READ_MORE_LABEL.to_string(),
                    },
                },
            ),
            RenderMode::Full => (
                None,
                BodyView::Full {
                    html: doc.body.clone(),
                    navigation: Navigation::for_reading(&ctx.navigation, self.config),
                    comments: CommentThread::bind(doc, self.config),
                },
            ),
        };

        PostView {
            title: doc.title.clone(),
            title_href,
            date: format_date(&doc.date, &self.config.date_format),
            datetime: date_xml(&doc.date),
            author: doc.author.clone(),
            tags: self.tag_links(doc),
            cover: doc.cover_image.as_ref().map(|cover| CoverView {
                src: href_for(self.config, &cover.src),
                alt: doc.title.clone(),
            }),
            body,
        }
    }

    /// Render the CV. Same renderer, always in full mode.
    pub fn render_cv(
        &self,
        document: &Document,
        navigation: NavigationContext<'_>,
    ) -> Result<PostView, RenderContextError> {
        let ctx = RenderContext::full(document, navigation)?;
        Ok(self.render(&ctx))
    }

    /// Tag links in authored order, one per distinct slug. Tags without a
    /// usable slug get no link.
    fn tag_links(&self, doc: &Document) -> Vec<TagLink> {
        let mut seen = HashSet::new();
        doc.tags
            .iter()
            .filter_map(|tag| {
                let slug = tag_slug(tag);
                if slug.is_empty() || !seen.insert(slug.clone()) {
                    return None;
                }
                Some(TagLink {
                    name: tag.trim().to_string(),
                    href: tag_url(self.config, tag),
                    slug,
                })
            })
            .collect()
    }
}
