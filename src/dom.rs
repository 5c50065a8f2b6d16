//! Document adapter: the narrow surface the controllers need from a page.
//!
//! Controllers never touch `web_sys` directly. They discover elements by
//! class name, read and write attributes, and set inline visibility through
//! [`Dom`], so the same logic drives the browser document and the in-memory
//! document used by the tests. Mutating methods take `&self` because the
//! browser DOM is itself interior-mutable.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Inline `display` override applied to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// `display: block`.
    Block,
    /// `display: none`.
    Hidden,
    /// No inline override; the stylesheet decides.
    Cleared,
}

impl Display {
    /// The CSS value written to `style.display`.
    #[must_use]
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Hidden => "none",
            Self::Cleared => "",
        }
    }
}

/// Element discovery and mutation over a rendered document.
pub trait Dom {
    /// Handle to one element. Cheap to clone.
    type Element: Clone;

    /// All elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<Self::Element>;

    /// Element with the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Parent element, if any.
    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;

    /// First descendant of `root` carrying `class`.
    fn find_in(&self, root: &Self::Element, class: &str) -> Option<Self::Element>;

    /// `el` itself or its nearest ancestor carrying `class`.
    fn closest(&self, el: &Self::Element, class: &str) -> Option<Self::Element>;

    /// Whether `el` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, el: &Self::Element) -> bool;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);

    fn set_text(&self, el: &Self::Element, text: &str);

    fn set_display(&self, el: &Self::Element, display: Display);

    /// Layout viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;
}

/// Read an ARIA boolean attribute. Only the literal `"true"` is truthy.
pub fn aria_flag<D: Dom>(dom: &D, el: &D::Element, name: &str) -> bool {
    dom.attribute(el, name).as_deref() == Some("true")
}

/// Write an ARIA boolean attribute as `"true"` / `"false"`.
pub fn set_aria_flag<D: Dom>(dom: &D, el: &D::Element, name: &str, value: bool) {
    dom.set_attribute(el, name, if value { "true" } else { "false" });
}
