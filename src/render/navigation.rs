//! Previous/next links shown under a full page

use serde::Serialize;

use super::context::NavigationContext;
use super::view::Link;
use crate::config::SiteConfig;
use crate::content::Document;
use crate::helpers::url_for;

/// Reading navigation: `previous` (←) leads to the newer neighbour and
/// `next` (→) to the older one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Navigation {
    pub previous: Option<Link>,
    pub next: Option<Link>,
}

impl Navigation {
    /// Turn publish-order neighbours into reading links.
    ///
    /// The resolver's `next` (published later) becomes the ← link and its
    /// `previous` (published earlier) becomes the → link, so readers walk
    /// from newer to older posts the way the index lists them.
    pub fn for_reading(neighbours: &NavigationContext<'_>, config: &SiteConfig) -> Self {
        let link_to = |document: &Document| Link {
            href: url_for(config, &document.path),
            label: document.title.clone(),
        };
        Self {
            previous: neighbours.next.map(link_to),
            next: neighbours.previous.map(link_to),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}
