use super::UrlScope;

impl UrlScope {
    /// Resolves an href found on a page into an absolute URL
    ///
    /// # Resolution Rules
    ///
    /// | href | result |
    /// |------|--------|
    /// | has a scheme (`https://...`, `mailto:...`) | unchanged |
    /// | protocol-relative (`//host/path`) | seed scheme + `:` + href |
    /// | root-relative (`/path`) | seed domain prefix + href |
    /// | anything else | seed URL + `/` + href |
    ///
    /// The last rule is a plain join against the seed URL, not RFC 3986
    /// reference resolution: `../x`, `./x` and `?q` are appended verbatim.
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The absolute URL
    /// * `None` - The href was empty
    ///
    /// # Example
    ///
    /// ```
    /// use docscrap::url::UrlScope;
    ///
    /// let scope = UrlScope::new("https://example.com/docs").unwrap();
    /// assert_eq!(scope.resolve("/api").as_deref(), Some("https://example.com/api"));
    /// assert_eq!(scope.resolve("intro").as_deref(), Some("https://example.com/docs/intro"));
    /// ```
    pub fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        if has_scheme(href) {
            return Some(href.to_string());
        }

        if href.starts_with("//") {
            return Some(format!("{}:{}", self.scheme(), href));
        }

        if href.starts_with('/') {
            return Some(format!("{}{}", self.domain_prefix(), href));
        }

        Some(format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            href
        ))
    }
}

/// Returns true if `href` starts with an RFC 3986 scheme followed by `:`
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
