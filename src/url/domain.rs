use url::Url;

/// Extracts `scheme://host[:port]` from a URL
///
/// Root-relative hrefs are resolved by prefixing them with this value.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docscrap::url::extract_domain_prefix;
///
/// let url = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(extract_domain_prefix(&url), "https://example.com");
///
/// let url = Url::parse("http://localhost:3000/").unwrap();
/// assert_eq!(extract_domain_prefix(&url), "http://localhost:3000");
/// ```
pub fn extract_domain_prefix(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    }
}

/// Strips a leading `https://` or `http://` from a URL string
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Computes the depth level of a URL relative to the seed URL
///
/// The seed prefix is stripped from `url`, the remainder is trimmed of
/// leading and trailing slashes, and its non-empty path segments are
/// counted. The result is never below 1, so the seed itself is level 1.
///
/// # Examples
///
/// ```
/// use docscrap::url::page_level;
///
/// assert_eq!(page_level("https://example.com", "https://example.com"), 1);
/// assert_eq!(page_level("https://example.com", "https://example.com/a/b"), 2);
/// ```
pub fn page_level(base_url: &str, url: &str) -> usize {
    let relative = url.strip_prefix(base_url).unwrap_or(url);
    let segments = relative
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count();

    segments.max(1)
}
