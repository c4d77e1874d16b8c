//! List site content

use anyhow::Result;
use std::collections::BTreeMap;

use crate::content::{ContentLoader, Document, DocumentKind};
use crate::helpers::tag_slug;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(blog);

    match content_type {
        "post" | "posts" => print_documents("Posts", &loader.load(DocumentKind::Post)?),
        "page" | "pages" => print_documents("Pages", &loader.load(DocumentKind::Page)?),
        "cv" => print_documents("CV", &loader.load(DocumentKind::Cv)?),
        "tag" | "tags" => {
            let posts = loader.load(DocumentKind::Post)?;
            let tags = tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.0.cmp(&b.0)));
            for (slug, (name, count)) in tags {
                println!("  {} ({}) -> /{}/{}/", name, count, blog.config.tag_dir, slug);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, cv, tag",
                content_type
            );
        }
    }

    Ok(())
}

fn print_documents(heading: &str, documents: &[Document]) {
    println!("{} ({}):", heading, documents.len());
    for doc in documents {
        println!(
            "  {} - {} {} [{}]",
            doc.date.format("%Y-%m-%d"),
            doc.title,
            doc.path,
            doc.id
        );
    }
}

/// Posts per tag slug, keyed by slug with the first spelling seen
fn tag_counts(posts: &[Document]) -> BTreeMap<String, (String, usize)> {
    let mut tags: BTreeMap<String, (String, usize)> = BTreeMap::new();
    for post in posts {
        let mut seen = Vec::new();
        for tag in &post.tags {
            let slug = tag_slug(tag);
            if slug.is_empty() || seen.contains(&slug) {
                continue;
            }
            seen.push(slug.clone());
            tags.entry(slug)
                .or_insert_with(|| (tag.trim().to_string(), 0))
                .1 += 1;
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_tag_counts_fold_spellings() {
        let mut a = Document::new(DocumentKind::Post, "A", "/a", Local::now());
        a.tags = vec!["Rust".to_string(), "CLI".to_string()];
        let mut b = Document::new(DocumentKind::Post, "B", "/b", Local::now());
        b.tags = vec!["rust".to_string()];

        let counts = tag_counts(&[a, b]);
        assert_eq!(counts.get("rust"), Some(&("Rust".to_string(), 2)));
        assert_eq!(counts.get("cli"), Some(&("CLI".to_string(), 1)));
    }
}
