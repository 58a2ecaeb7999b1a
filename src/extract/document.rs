//! Queryable HTML document
//!
//! A thin wrapper over `scraper::Html` exposing the handful of operations
//! the extractor and the link parser need: select, remove, text and attr.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document that supports selector-driven node removal
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns every element matching `css`, in document order
    ///
    /// Only elements still attached under the root are visited, so regions
    /// dropped by [`HtmlDocument::remove`] never match.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>, String> {
        let selector = compile(css)?;
        Ok(self.attached(&selector).collect())
    }

    /// Returns the first element matching `css`, if any
    pub fn select_first(&self, css: &str) -> Result<Option<ElementRef<'_>>, String> {
        let selector = compile(css)?;
        let first = self.attached(&selector).next();
        Ok(first)
    }

    /// Detaches every element matching `css` from the tree
    ///
    /// Returns the number of elements removed. Matches nested inside an
    /// already removed element are counted too.
    pub fn remove(&mut self, css: &str) -> Result<usize, String> {
        let selector = compile(css)?;
        let ids: Vec<_> = self.attached(&selector).map(|el| el.id()).collect();

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }

        Ok(ids.len())
    }

    /// Walks the root element and its attached descendants
    ///
    /// `Html::select` scans the node arena, which still holds detached
    /// subtrees.
    fn attached<'a, 'b>(
        &'a self,
        selector: &'b Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'b
    where
        'a: 'b,
    {
        let root = self.html.root_element();
        std::iter::once(root)
            .filter(move |el| selector.matches(el))
            .chain(root.select(selector))
    }

    /// Returns the `<body>` element, or the root element when there is none
    pub fn body(&self) -> ElementRef<'_> {
        self.select_first("body")
            .ok()
            .flatten()
            .unwrap_or_else(|| self.html.root_element())
    }
}

/// Concatenates all descendant text of an element
pub fn text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Returns an attribute value of an element
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Returns all descendants of `element` matching `css`, in document order
pub fn select_within<'a>(element: &ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, String> {
    let selector = compile(css)?;
    Ok(element.select(&selector).collect())
}

/// Compiles a CSS selector, flattening the parse error into a message
fn compile(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{}': {:?}", css, e))
}
