//! Render context: the validated input of one page render

use thiserror::Error;

use crate::content::{Document, DocumentKind};

/// Errors raised while assembling a render context
#[derive(Error, Debug, PartialEq)]
pub enum RenderContextError {
    #[error("Document {id} has an empty title")]
    EmptyTitle { id: String },

    #[error("Document {id} has invalid path {path:?}: must start with '/'")]
    InvalidPath { id: String, path: String },
}

/// Chronological neighbours of a document, as bound by the adjacency
/// resolver: `previous` was published earlier, `next` later.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationContext<'a> {
    pub previous: Option<&'a Document>,
    pub next: Option<&'a Document>,
}

impl<'a> NavigationContext<'a> {
    pub fn new(previous: Option<&'a Document>, next: Option<&'a Document>) -> Self {
        Self { previous, next }
    }
}

/// How a document is rendered. A property of the call, not the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// List rendering: linked title, excerpt, "read more" link
    Teaser { excerpt: String },
    /// Standalone page: body, navigation and comments
    Full,
}

/// Everything one render needs
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub document: &'a Document,
    pub navigation: NavigationContext<'a>,
    pub mode: RenderMode,
}

impl<'a> RenderContext<'a> {
    /// Build a context, validating the document's required fields.
    ///
    /// A non-empty `excerpt` selects teaser mode, anything else full mode.
    /// CV documents are never listed, so they always render in full.
    pub fn new(
        document: &'a Document,
        navigation: NavigationContext<'a>,
        excerpt: Option<&str>,
    ) -> Result<Self, RenderContextError> {
        Self::validate(document)?;

        let excerpt = excerpt.map(str::trim).filter(|e| !e.is_empty());
        let mode = match (document.kind, excerpt) {
            (DocumentKind::Cv, Some(_)) => {
                tracing::debug!("Ignoring excerpt for CV document {}", document.id);
                RenderMode::Full
            }
            (_, Some(excerpt)) => RenderMode::Teaser {
                excerpt: excerpt.to_string(),
            },
            (_, None) => RenderMode::Full,
        };

        Ok(Self {
            document,
            navigation,
            mode,
        })
    }

    /// Standalone page rendering
    pub fn full(
        document: &'a Document,
        navigation: NavigationContext<'a>,
    ) -> Result<Self, RenderContextError> {
        Self::new(document, navigation, None)
    }

    /// List rendering, using the authored excerpt or the derived one
    pub fn teaser(document: &'a Document) -> Result<Self, RenderContextError> {
        Self::new(document, NavigationContext::default(), Some(document.summary()))
    }

    pub fn is_teaser(&self) -> bool {
        matches!(self.mode, RenderMode::Teaser { .. })
    }

    /// Check the fields every render needs: a non-empty title and a path
    /// starting with `/`
    pub fn validate(document: &Document) -> Result<(), RenderContextError> {
        if document.title.trim().is_empty() {
            return Err(RenderContextError::EmptyTitle {
                id: document.id.clone(),
            });
        }

        if !document.path.starts_with('/') {
            return Err(RenderContextError::InvalidPath {
                id: document.id.clone(),
                path: document.path.clone(),
            });
        }

        Ok(())
    }
}
