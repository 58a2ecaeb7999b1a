use super::UrlScope;
use std::collections::HashSet;
use url::Url;

/// Path infixes that mark non-documentation branches of a site
pub const IGNORED_PATH_INFIXES: &[&str] = &[
    "/assets/",
    "/static/",
    "/img/",
    "/images/",
    "/js/",
    "/css/",
    "/fonts/",
    "/examples/",
    "/blog/",
    "/community/",
    "/download/",
];

impl UrlScope {
    /// Determines whether a URL should be crawled
    ///
    /// A URL is in scope when it:
    /// - parses as an absolute URL on the seed's host and port
    /// - has not been visited yet
    /// - has no ignored infix in its path relative to the seed's path
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL to check
    /// * `visited` - URLs already processed in this crawl
    pub fn in_scope(&self, url: &str, visited: &HashSet<String>) -> bool {
        let Ok(candidate) = Url::parse(url) else {
            return false;
        };

        if candidate.host_str().is_none()
            || candidate.host_str() != self.base.host_str()
            || candidate.port_or_known_default() != self.base.port_or_known_default()
        {
            return false;
        }

        if visited.contains(url) {
            return false;
        }

        let relative = relative_path(candidate.path(), self.base.path());
        !IGNORED_PATH_INFIXES
            .iter()
            .any(|infix| relative.contains(infix))
    }
}

/// Returns `path` with the seed path stripped, always starting with `/`
fn relative_path(path: &str, base_path: &str) -> String {
    let base_path = base_path.trim_end_matches('/');
    let relative = path.strip_prefix(base_path).unwrap_or(path);

    if relative.starts_with('/') {
        relative.to_string()
    } else {
        format!("/{}", relative)
    }
}
