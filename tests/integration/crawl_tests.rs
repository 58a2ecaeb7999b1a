//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock documentation sites and test
//! the full crawl cycle end-to-end, from the seed URL to the files on disk.

use docscrap::config::{OutputMode, ScrapeConfig};
use docscrap::crawler::crawl;
use docscrap::{CrawlPhase, Coordinator, ScrapeError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with delays disabled
fn create_test_config(base_url: &str, output: &Path, organization: OutputMode) -> ScrapeConfig {
    let mut config = ScrapeConfig::new(base_url, output);
    config.no_delay = true;
    config.organization = organization;
    config
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a three-page documentation site under /docs
///
/// The seed links to install (from its navigation) and usage; install
/// links back to the seed and on to usage.
async fn mount_docs_site(server: &MockServer) {
    mount_page(
        server,
        "/docs",
        r#"<html><body>
            <nav><a href="/docs/install">Install</a></nav>
            <main>
                <h1>Home</h1>
                <p>Welcome to the docs.</p>
                <a href="/docs/usage">Usage</a>
            </main>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/docs/install",
        r#"<html><body>
            <main>
                <h1>Install</h1>
                <pre><code class="language-bash">cargo install docscrap</code></pre>
                <a href="/docs">Home</a>
                <a href="/docs/usage">Usage</a>
            </main>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        server,
        "/docs/usage",
        r#"<html><body>
            <article>
                <h1>Usage</h1>
                <ul><li>Pick a seed</li><li>Run the scraper</li></ul>
            </article>
        </body></html>"#
            .to_string(),
    )
    .await;
}

#[tokio::test]
async fn test_single_page_mode_writes_page_body() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<html><body><main><h1>Only</h1><p>Body</p>
           <a href="/docs/next">Next</a></main></body></html>"#
            .to_string(),
    )
    .await;

    // Link discovery is disabled, so the linked page must never be fetched
    Mock::given(method("GET"))
        .and(path("/docs/next"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.md");
    let mut config = create_test_config(&seed, &output, OutputMode::Single);
    config.single_page = true;

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();

    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.written_files, vec![output.clone()]);

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(&format!("\n## Source: {}\n\n", seed)));
    assert!(content.contains("# Only\n\n"));
    assert!(content.contains("Body\n\n"));
    assert!(content.ends_with("---\n\n"));
}

#[tokio::test]
async fn test_single_page_mode_seed_failure_is_fatal() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());

    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.md");
    let mut config = create_test_config(&seed, &output, OutputMode::Single);
    config.single_page = true;

    let result = crawl(config, StdRng::seed_from_u64(0)).await;
    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 500, .. })
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_pages_mode_writes_files_and_index() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());
    mount_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("site.md");
    let config = create_test_config(&seed, &output, OutputMode::Pages);

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();

    let urls: Vec<&str> = report.pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            seed.clone(),
            format!("{}/install", seed),
            format!("{}/usage", seed),
        ]
    );
    assert!(report.failed.is_empty());

    let site_dir = dir.path().join("site");
    for name in ["home.md", "install.md", "usage.md", "index.md"] {
        assert!(site_dir.join(name).exists(), "missing {}", name);
    }
    assert_eq!(report.written_files.len(), 4);

    let install = std::fs::read_to_string(site_dir.join("install.md")).unwrap();
    assert!(install.contains("```bash\ncargo install docscrap\n```"));

    let usage = std::fs::read_to_string(site_dir.join("usage.md")).unwrap();
    assert!(usage.contains("- Pick a seed\n- Run the scraper\n"));

    let index = std::fs::read_to_string(site_dir.join("index.md")).unwrap();
    let corpus = seed.trim_start_matches("http://");
    assert!(index.starts_with(&format!(
        "# Documentation: {}\n\n## Table of Contents\n\n",
        corpus
    )));

    let home_line = format!("- [Home](home.md) - [source]({})", seed);
    let install_line = format!("- [Install](install.md) - [source]({}/install)", seed);
    let usage_line = format!("- [Usage](usage.md) - [source]({}/usage)", seed);
    let home_at = index.find(&home_line).unwrap();
    let install_at = index.find(&install_line).unwrap();
    let usage_at = index.find(&usage_line).unwrap();
    assert!(home_at < install_at && install_at < usage_at);
}

#[tokio::test]
async fn test_single_mode_combines_pages_in_crawl_order() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());
    mount_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("docs.md");
    let config = create_test_config(&seed, &output, OutputMode::Single);

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();
    assert_eq!(report.written_files, vec![output.clone()]);

    let content = std::fs::read_to_string(&output).unwrap();
    let corpus = seed.trim_start_matches("http://");
    assert!(content.starts_with(&format!("# Documentation: {}\n\n", corpus)));
    assert_eq!(content.matches("\n## Source: ").count(), 3);

    let home_at = content.find("# Home").unwrap();
    let install_at = content.find("# Install").unwrap();
    let usage_at = content.find("# Usage").unwrap();
    assert!(home_at < install_at && install_at < usage_at);
    assert!(content.contains("Welcome to the docs.\n\n"));
}

#[tokio::test]
async fn test_denylisted_and_cross_host_links_not_followed() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());
    let port = server.address().port();

    mount_page(
        &server,
        "/docs",
        format!(
            r#"<html><body><main>
                <h1>Home</h1>
                <a href="/docs/blog/post">Blog</a>
                <a href="/docs/static/app.js">Script</a>
                <a href="http://localhost:{}/docs/elsewhere">Elsewhere</a>
                <a href="/docs/guide">Guide</a>
            </main></body></html>"#,
            port
        ),
    )
    .await;
    mount_page(
        &server,
        "/docs/guide",
        "<main><h1>Guide</h1><p>Read me</p></main>".to_string(),
    )
    .await;

    for route in ["/docs/blog/post", "/docs/static/app.js", "/docs/elsewhere"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("site.md");
    let config = create_test_config(&seed, &output, OutputMode::Chapters);

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();

    let titles: Vec<&str> = report.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Home", "Guide"]);
    assert!(!dir.path().join("site").join("post.md").exists());
}

#[tokio::test]
async fn test_failed_page_is_skipped() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<main><h1>Home</h1>
           <a href="/docs/broken">Broken</a>
           <a href="/docs/fine">Fine</a></main>"#
            .to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/docs/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/docs/fine",
        "<main><h1>Fine</h1><p>Still crawled</p></main>".to_string(),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("site.md");
    let config = create_test_config(&seed, &output, OutputMode::Pages);

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.failed, vec![format!("{}/broken", seed)]);

    let index = std::fs::read_to_string(dir.path().join("site").join("index.md")).unwrap();
    assert!(index.contains("[Fine](fine.md)"));
    assert!(!index.contains("broken"));
}

#[tokio::test]
async fn test_duplicate_titles_get_unique_files() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());

    mount_page(
        &server,
        "/docs",
        r#"<main><h1>Overview</h1>
           <a href="/docs/a">A</a><a href="/docs/b">B</a></main>"#
            .to_string(),
    )
    .await;
    mount_page(&server, "/docs/a", "<main><h1>Overview</h1></main>".to_string()).await;
    mount_page(&server, "/docs/b", "<main><h1>Overview</h1></main>".to_string()).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("site.md");
    let config = create_test_config(&seed, &output, OutputMode::Pages);

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();

    let mut filenames: Vec<&str> = report.pages.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(filenames[0], "overview.md");
    filenames.sort();
    filenames.dedup();
    assert_eq!(filenames.len(), 3);

    // One file per page plus the index
    let written = std::fs::read_dir(dir.path().join("site")).unwrap().count();
    assert_eq!(written, 4);
}

#[tokio::test]
async fn test_zero_length_delay_between_fetches() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());
    mount_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("docs.md");
    let mut config = create_test_config(&seed, &output, OutputMode::Single);
    config.no_delay = false;
    config.min_delay = 0.0;
    config.max_delay = 0.0;

    let report = crawl(config, StdRng::seed_from_u64(0)).await.unwrap();
    assert_eq!(report.pages.len(), 3);
}

#[tokio::test]
async fn test_invalid_delay_bounds_rejected_before_fetching() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.md");
    let mut config = create_test_config(&seed, &output, OutputMode::Single);
    config.min_delay = 3.0;
    config.max_delay = 1.0;

    let result = crawl(config, StdRng::seed_from_u64(0)).await;
    assert!(matches!(result, Err(ScrapeError::Config(_))));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_coordinator_reaches_done() {
    let server = MockServer::start().await;
    let seed = format!("{}/docs", server.uri());
    mount_docs_site(&server).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&seed, &dir.path().join("out.md"), OutputMode::Single);

    let mut coordinator = Coordinator::new(config, StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(coordinator.phase(), CrawlPhase::Idle);

    coordinator.run().await.unwrap();
    assert_eq!(coordinator.phase(), CrawlPhase::Done);
}
