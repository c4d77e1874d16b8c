//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::ContentLoader;
use crate::generator::{GenerateStats, Generator};
use crate::Blog;

/// Quiet period before a burst of file events triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Load all content and generate the site
pub fn run(blog: &Blog) -> Result<()> {
    build(blog).map(|_| ())
}

/// Load all content and generate the site, returning what was written
pub fn build(blog: &Blog) -> Result<GenerateStats> {
    let start = Instant::now();

    let content = ContentLoader::new(blog).load_site()?;
    tracing::info!(
        "Loaded {} posts, {} pages{}",
        content.posts.len(),
        content.pages.len(),
        if content.cv.is_some() { " and a CV" } else { "" }
    );

    let stats = Generator::new(blog)?.generate(&content)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(stats)
}

/// Watch content directories and the config file, regenerating on change
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    for kind in crate::content::DocumentKind::ALL {
        let dir = blog.content_dir(kind);
        if dir.exists() {
            watcher.watch(&dir, notify::RecursiveMode::Recursive)?;
        }
    }

    let config_path = blog.base_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut pending = false;
    let mut last_event = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                tracing::debug!("Change: {:?}", event.paths);
                pending = true;
                last_event = Instant::now();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if pending && last_event.elapsed() >= DEBOUNCE {
            pending = false;
            tracing::info!("Files changed, regenerating...");
            // Config edits take effect on the next build
            match Blog::new(&blog.base_dir).and_then(|b| build(&b)) {
                Ok(_) => {}
                Err(e) => tracing::error!("Generation failed: {:#}", e),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_end_to_end() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(crate::CONFIG_FILE),
            "title: Dennis S\nurl: https://www.dennis-s.dk\ncomments:\n  shortname: dennis-s-dk\n",
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("posts")).unwrap();
        fs::write(
            tmp.path().join("posts/hello.md"),
            "---\ntitle: Hello World\ndate: 2020-01-02\npath: /hello-world\ntags:\n  - Gatsby\n  - React\nexcerpt: A short intro\n---\nFull *content*\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("posts/older.md"),
            "---\ntitle: Older\ndate: 2019-01-02\npath: /older-post\n---\nOld\n",
        )
        .unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        let stats = build(&blog).unwrap();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.tag_pages, 2);

        let index = fs::read_to_string(blog.public_dir.join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="/hello-world">Hello World</a>"#));
        assert!(index.contains("<p>A short intro</p>"));
        assert!(index.contains(r#"<a href="/tag/gatsby/""#));
        assert!(index.contains(r#"<a href="/tag/react/""#));

        let post = fs::read_to_string(blog.public_dir.join("hello-world/index.html")).unwrap();
        assert!(post.contains("<p>Full <em>content</em></p>"));
        assert!(post.contains(r#"<a href="/older-post"><span class="button-text">Older</span>"#));
        assert!(!post.contains("icon-prev"));
        assert!(post.contains(r#"data-identifier="/hello-world""#));
        assert!(post.contains(r#"<meta name="description" content="A short intro">"#));
    }
}
