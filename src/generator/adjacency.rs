//! Binds each document to its chronological neighbours

use crate::content::Document;
use crate::render::NavigationContext;

/// Pair every document with its neighbours.
///
/// `documents` must be ordered newest first, as the loader returns them, and
/// hold only documents that will get a page of their own.
/// `previous` is the neighbour published earlier (the following entry) and
/// `next` the one published later (the preceding entry).
pub fn resolve<'a>(documents: &[&'a Document]) -> Vec<(&'a Document, NavigationContext<'a>)> {
    documents
        .iter()
        .enumerate()
        .map(|(i, &doc)| {
            let previous = documents.get(i + 1).copied();
            let next = i.checked_sub(1).and_then(|j| documents.get(j)).copied();
            (doc, NavigationContext::new(previous, next))
        })
        .collect()
}
