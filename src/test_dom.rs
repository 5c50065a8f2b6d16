//! In-memory document used by the controller tests.
//!
//! Elements are indices into an arena; index 0 is the `<body>` root. Document
//! order is insertion order, which matches how the fixtures build pages
//! top to bottom.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::dom::{Display, Dom};

#[derive(Debug)]
struct Node {
    parent: Option<usize>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    display: Display,
}

#[derive(Debug)]
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    viewport_width: Cell<f64>,
}

impl FakeDom {
    pub fn new(viewport_width: f64) -> Self {
        let body = Node {
            parent: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            display: Display::Cleared,
        };
        Self { nodes: RefCell::new(vec![body]), viewport_width: Cell::new(viewport_width) }
    }

    pub fn body(&self) -> usize {
        0
    }

    /// Append a child of `parent` with a space-separated class list.
    pub fn add(&self, parent: usize, classes: &str) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            parent: Some(parent),
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            attrs: HashMap::new(),
            text: String::new(),
            display: Display::Cleared,
        });
        nodes.len() - 1
    }

    /// Set an attribute and hand the element back, for chained fixtures.
    pub fn with_attr(&self, el: usize, name: &str, value: &str) -> usize {
        self.set_attribute(&el, name, value);
        el
    }

    pub fn attr(&self, el: usize, name: &str) -> Option<String> {
        self.attribute(&el, name)
    }

    pub fn text(&self, el: usize) -> String {
        self.nodes.borrow()[el].text.clone()
    }

    pub fn display(&self, el: usize) -> Display {
        self.nodes.borrow()[el].display
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport_width.set(width);
    }

    fn has_class(&self, el: usize, class: &str) -> bool {
        self.nodes.borrow()[el].classes.iter().any(|c| c == class)
    }

    fn is_descendant(&self, el: usize, ancestor: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = nodes[el].parent;
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = nodes[current].parent;
        }
        false
    }
}

impl Dom for FakeDom {
    type Element = usize;

    fn query_class(&self, class: &str) -> Vec<usize> {
        let len = self.nodes.borrow().len();
        (0..len).filter(|&el| self.has_class(el, class)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes.borrow().iter().position(|n| n.attrs.get("id").map(String::as_str) == Some(id))
    }

    fn parent(&self, el: &usize) -> Option<usize> {
        self.nodes.borrow()[*el].parent
    }

    fn find_in(&self, root: &usize, class: &str) -> Option<usize> {
        let len = self.nodes.borrow().len();
        (0..len).find(|&el| self.has_class(el, class) && self.is_descendant(el, *root))
    }

    fn closest(&self, el: &usize, class: &str) -> Option<usize> {
        let mut cursor = Some(*el);
        while let Some(current) = cursor {
            if self.has_class(current, class) {
                return Some(current);
            }
            cursor = self.nodes.borrow()[current].parent;
        }
        None
    }

    fn contains(&self, ancestor: &usize, el: &usize) -> bool {
        ancestor == el || self.is_descendant(*el, *ancestor)
    }

    fn attribute(&self, el: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*el].attrs.get(name).cloned()
    }

    fn set_attribute(&self, el: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*el].attrs.insert(name.to_owned(), value.to_owned());
    }

    fn set_text(&self, el: &usize, text: &str) {
        text.clone_into(&mut self.nodes.borrow_mut()[*el].text);
    }

    fn set_display(&self, el: &usize, display: Display) {
        self.nodes.borrow_mut()[*el].display = display;
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }
}
