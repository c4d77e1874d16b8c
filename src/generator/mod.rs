//! Generator module - renders documents and writes the static site

pub mod adjacency;

use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::content::{Document, SiteContent};
use crate::helpers::{full_url_for, tag_slug, url_for};
use crate::render::{NavigationContext, PageRenderer, PostView, RenderContext};
use crate::templates::{PaginationData, SeoData, SiteData, TemplateRenderer};
use crate::Blog;

/// Counts of what a build wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub documents: usize,
    pub index_pages: usize,
    pub tag_pages: usize,
    pub images: usize,
}

/// Static site generator using Tera templates
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, content: &SiteContent) -> Result<GenerateStats> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let site_data = SiteData::from_config(&self.blog.config);
        let mut stats = GenerateStats::default();

        stats.images = self.copy_cover_images(content)?;

        // Rejected posts get no page, so they must not be anyone's neighbour
        let posts: Vec<&Document> = content
            .posts
            .iter()
            .filter(|doc| match RenderContext::validate(doc) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", doc.id, e);
                    false
                }
            })
            .collect();

        for (doc, navigation) in adjacency::resolve(&posts) {
            stats.documents += self.generate_document_page(doc, navigation, &site_data)?;
        }

        for doc in &content.pages {
            stats.documents +=
                self.generate_document_page(doc, NavigationContext::default(), &site_data)?;
        }

        if let Some(cv) = &content.cv {
            stats.documents +=
                self.generate_document_page(cv, NavigationContext::default(), &site_data)?;
        }

        stats.index_pages = self.generate_index_pages(&posts, &site_data)?;
        stats.tag_pages = self.generate_tag_pages(&posts, &site_data)?;

        tracing::info!(
            "Generated {} documents, {} index pages, {} tag pages, {} images",
            stats.documents,
            stats.index_pages,
            stats.tag_pages,
            stats.images
        );

        Ok(stats)
    }

    /// Create a base context with common variables
    fn create_base_context(&self, site_data: &SiteData, seo: &SeoData) -> Context {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("seo", seo);
        context.insert("current_year", &chrono::Local::now().year());
        context
    }

    /// Render one post, page or the CV in full. Returns the number of pages
    /// written (0 when the document is rejected).
    fn generate_document_page(
        &self,
        doc: &Document,
        navigation: NavigationContext<'_>,
        site_data: &SiteData,
    ) -> Result<usize> {
        let ctx = match RenderContext::full(doc, navigation) {
            Ok(ctx) => ctx,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", doc.id, e);
                return Ok(0);
            }
        };
        let view = PageRenderer::new(&self.blog.config).render(&ctx);

        let seo = self.document_seo(doc);
        let mut context = self.create_base_context(site_data, &seo);
        context.insert("post", &view);

        let html = self.renderer.render("post.html", &context)?;
        self.write_page(&doc.path, &html)?;
        tracing::debug!("Generated {}: {}", doc.kind, doc.path);

        Ok(1)
    }

    /// Generate the home page and its paginated followers, posts in teaser
    /// mode
    fn generate_index_pages(&self, posts: &[&Document], site_data: &SiteData) -> Result<usize> {
        let config = &self.blog.config;
        let per_page = config.posts_per_page.max(1);
        let teasers = self.teasers(posts.iter().copied());
        let total_pages = teasers.len().div_ceil(per_page).max(1);

        for page_num in 1..=total_pages {
            let start = (page_num - 1) * per_page;
            let end = (start + per_page).min(teasers.len());
            let page_posts = &teasers[start..end];

            let current_url = index_route(page_num);
            let pagination = PaginationData {
                per_page,
                total: total_pages,
                current: page_num,
                current_url: url_for(config, &current_url),
                prev_link: (page_num > 1).then(|| url_for(config, &index_route(page_num - 1))),
                next_link: (page_num < total_pages)
                    .then(|| url_for(config, &index_route(page_num + 1))),
            };

            let seo = SeoData {
                title: config.title.clone(),
                description: config.description.clone(),
                url: full_url_for(config, &current_url),
                image: None,
            };
            let mut context = self.create_base_context(site_data, &seo);
            context.insert("posts", page_posts);
            context.insert("pagination", &pagination);

            let html = self.renderer.render("index.html", &context)?;
            self.write_page(&current_url, &html)?;
        }

        tracing::debug!("Generated {} index pages", total_pages);
        Ok(total_pages)
    }

    /// Generate one listing page per tag slug
    fn generate_tag_pages(&self, posts: &[&Document], site_data: &SiteData) -> Result<usize> {
        let config = &self.blog.config;

        // slug -> (first spelling seen, posts)
        let mut tags: BTreeMap<String, (String, Vec<&Document>)> = BTreeMap::new();
        for &post in posts {
            let mut slugs_in_post = Vec::new();
            for tag in &post.tags {
                let slug = tag_slug(tag);
                if slug.is_empty() || slugs_in_post.contains(&slug) {
                    continue;
                }
                slugs_in_post.push(slug.clone());
                tags.entry(slug)
                    .or_insert_with(|| (tag.trim().to_string(), Vec::new()))
                    .1
                    .push(post);
            }
        }

        for (slug, (name, tag_posts)) in &tags {
            let route = format!("/{}/{}/", config.tag_dir, slug);
            let seo = SeoData {
                title: format!("#{}", name),
                description: config.description.clone(),
                url: full_url_for(config, &route),
                image: None,
            };

            let mut context = self.create_base_context(site_data, &seo);
            context.insert("tag_name", name);
            context.insert("posts", &self.teasers(tag_posts.iter().copied()));

            let html = self.renderer.render("tag.html", &context)?;
            self.write_page(&route, &html)?;
        }

        Ok(tags.len())
    }

    /// Teaser views for a list, skipping documents that fail validation
    fn teasers<'d>(&self, docs: impl Iterator<Item = &'d Document>) -> Vec<PostView> {
        let renderer = PageRenderer::new(&self.blog.config);
        docs.filter_map(|doc| match RenderContext::teaser(doc) {
            Ok(ctx) => Some(renderer.render(&ctx)),
            Err(e) => {
                tracing::warn!("Leaving {} out of listings: {}", doc.id, e);
                None
            }
        })
        .collect()
    }

    fn document_seo(&self, doc: &Document) -> SeoData {
        let config = &self.blog.config;
        SeoData {
            title: doc.title.clone(),
            description: doc.summary().to_string(),
            url: full_url_for(config, &doc.path),
            image: doc.cover_image.as_ref().map(|cover| {
                if cover.src.starts_with('/') {
                    full_url_for(config, &cover.src)
                } else {
                    cover.src.clone()
                }
            }),
        }
    }

    /// Copy local cover images to the public path their `src` names
    fn copy_cover_images(&self, content: &SiteContent) -> Result<usize> {
        let covers = content
            .posts
            .iter()
            .chain(&content.pages)
            .chain(&content.cv)
            .filter_map(|doc| doc.cover_image.as_ref().map(|cover| (doc, cover)));

        let mut copied = 0;

        for (doc, cover) in covers {
            let Some(source) = &cover.source else {
                continue;
            };
            if !source.is_file() {
                tracing::warn!("Cover image {:?} of {} not found", source, doc.id);
                continue;
            }
            let dest = self.blog.public_dir.join(cover.src.trim_start_matches('/'));
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create dir {:?}", parent))?;
            }
            fs::copy(source, &dest)
                .with_context(|| format!("Failed to copy {:?} to {:?}", source, dest))?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Write `html` as the index file of `route`
    fn write_page(&self, route: &str, html: &str) -> Result<PathBuf> {
        let clean_path = route.trim_matches('/');
        let output_path = if clean_path.is_empty() {
            self.blog.public_dir.join("index.html")
        } else {
            self.blog.public_dir.join(clean_path).join("index.html")
        };

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;

        Ok(output_path)
    }
}

/// Route of the n-th (1-based) index page
fn index_route(page_num: usize) -> String {
    if page_num <= 1 {
        "/".to_string()
    } else {
        format!("/page/{}/", page_num)
    }
}
