//! Header dropdown menus.
//!
//! A `.dropdown-btn` opens the `.dropdown` submenu that shares its parent
//! container. Dropdowns are independent: opening one leaves the others as
//! they are, and an outside click only closes the menus whose container does
//! not contain the click.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::consts::{ATTR_EXPANDED, DROPDOWN_BUTTON_CLASS, DROPDOWN_MENU_CLASS};
use crate::dom::{Display, Dom, aria_flag, set_aria_flag};

/// A dropdown button, its container, and the submenu it opens.
#[derive(Debug, Clone)]
pub struct Dropdown<E> {
    pub button: E,
    pub container: E,
    pub menu: Option<E>,
}

pub struct DropdownController<D: Dom> {
    dropdowns: Vec<Dropdown<D::Element>>,
}

impl<D: Dom> DropdownController<D> {
    pub fn init(dom: &D) -> Self {
        let dropdowns = dom
            .query_class(DROPDOWN_BUTTON_CLASS)
            .into_iter()
            .filter_map(|button| {
                let container = dom.parent(&button)?;
                let menu = dom.find_in(&container, DROPDOWN_MENU_CLASS);
                Some(Dropdown { button, container, menu })
            })
            .collect();
        Self { dropdowns }
    }

    /// Flip dropdown `index`. Returns the new expanded state.
    pub fn activate(&self, dom: &D, index: usize) -> Option<bool> {
        let dropdown = self.dropdowns.get(index)?;
        let expanded = !aria_flag(dom, &dropdown.button, ATTR_EXPANDED);
        set_aria_flag(dom, &dropdown.button, ATTR_EXPANDED, expanded);
        if let Some(menu) = &dropdown.menu {
            dom.set_display(menu, if expanded { Display::Block } else { Display::Hidden });
        }
        Some(expanded)
    }

    /// Close every dropdown whose container does not contain `target`.
    pub fn document_click(&self, dom: &D, target: &D::Element) {
        for dropdown in &self.dropdowns {
            if dom.contains(&dropdown.container, target) {
                continue;
            }
            set_aria_flag(dom, &dropdown.button, ATTR_EXPANDED, false);
            if let Some(menu) = &dropdown.menu {
                dom.set_display(menu, Display::Hidden);
            }
        }
    }

    #[must_use]
    pub fn dropdowns(&self) -> &[Dropdown<D::Element>] {
        &self.dropdowns
    }
}
