//! Page surface port and a headless implementation.

use std::collections::HashMap;

/// How an element is scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The parts of the page the widget touches, addressed by element id.
pub trait PageSurface {
    /// Replace the text content of element `id`.
    ///
    /// Returns `false` without doing anything if the element is absent.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Scroll element `id` into the viewport.
    ///
    /// Returns `false` without doing anything if the element is absent.
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool;
}

/// In-memory page: a set of element ids with their text, plus a scroll log.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    elements: HashMap<String, String>,
    scrolls: Vec<(String, ScrollBehavior)>,
}

impl HeadlessPage {
    /// Create a page with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element with the given id.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), String::new());
        self
    }

    /// Text content of element `id`, if it exists.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Scrolls performed so far, oldest first.
    #[must_use]
    pub fn scrolls(&self) -> &[(String, ScrollBehavior)] {
        &self.scrolls
    }
}

impl PageSurface for HeadlessPage {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.elements.get_mut(id).is_some_and(|content| {
            text.clone_into(content);
            true
        })
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        self.scrolls.push((id.to_string(), behavior));
        true
    }
}

impl<T: PageSurface + ?Sized> PageSurface for &mut T {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        (**self).set_text(id, text)
    }

    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        (**self).scroll_into_view(id, behavior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_on_present_element() {
        let mut page = HeadlessPage::new().with_element("cart-counter");
        assert!(page.set_text("cart-counter", "3"));
        assert_eq!(page.text("cart-counter"), Some("3"));
    }

    #[test]
    fn test_set_text_on_missing_element() {
        let mut page = HeadlessPage::new();
        assert!(!page.set_text("cart-counter", "3"));
        assert_eq!(page.text("cart-counter"), None);
    }

    #[test]
    fn test_scroll_log() {
        let mut page = HeadlessPage::new().with_element("products");
        assert!(page.scroll_into_view("products", ScrollBehavior::Smooth));
        assert!(!page.scroll_into_view("missing", ScrollBehavior::Smooth));
        assert_eq!(
            page.scrolls(),
            [("products".to_string(), ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn test_scroll_log_keeps_behavior() {
        let mut page = HeadlessPage::new().with_element("products");
        page.scroll_into_view("products", ScrollBehavior::Instant);
        page.scroll_into_view("products", ScrollBehavior::Smooth);
        let behaviors: Vec<_> = page.scrolls().iter().map(|(_, b)| *b).collect();
        assert_eq!(behaviors, [ScrollBehavior::Instant, ScrollBehavior::Smooth]);
    }
}
