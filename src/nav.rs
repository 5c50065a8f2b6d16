//! Mobile navigation toggles.
//!
//! Each `.nav-toggle` button opens a `.main-nav` panel, found through its
//! `aria-controls` id or, failing that, inside the button's parent. The
//! expanded flag lives in the button's `aria-expanded` attribute; nothing is
//! cached here beyond the button-to-panel binding.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ATTR_CONTROLS, ATTR_EXPANDED, MAIN_NAV_CLASS, NAV_TOGGLE_CLASS, SITE_HEADER_CLASS};
use crate::dom::{Display, Dom, aria_flag, set_aria_flag};

/// A toggle button and the panel it opens.
#[derive(Debug, Clone)]
pub struct NavToggle<E> {
    pub button: E,
    pub panel: Option<E>,
}

pub struct NavController<D: Dom> {
    toggles: Vec<NavToggle<D::Element>>,
    breakpoint_px: f64,
}

impl<D: Dom> NavController<D> {
    pub fn init(dom: &D, breakpoint_px: f64) -> Self {
        let toggles = dom
            .query_class(NAV_TOGGLE_CLASS)
            .into_iter()
            .map(|button| {
                let panel = resolve_panel(dom, &button);
                if panel.is_none() {
                    log::debug!("nav toggle has no panel to control");
                }
                NavToggle { button, panel }
            })
            .collect();
        Self { toggles, breakpoint_px }
    }

    /// Whether the viewport is at or below the mobile breakpoint.
    pub fn is_mobile(&self, dom: &D) -> bool {
        dom.viewport_width() <= self.breakpoint_px
    }

    /// Flip toggle `index`. Returns the new expanded state.
    pub fn activate(&self, dom: &D, index: usize) -> Option<bool> {
        let toggle = self.toggles.get(index)?;
        let expanded = !aria_flag(dom, &toggle.button, ATTR_EXPANDED);
        set_aria_flag(dom, &toggle.button, ATTR_EXPANDED, expanded);
        if let Some(panel) = &toggle.panel {
            dom.set_display(panel, if expanded { Display::Block } else { Display::Cleared });
        }
        Some(expanded)
    }

    /// Document-wide click. On mobile, a click outside the site header
    /// collapses every panel and toggle.
    pub fn document_click(&self, dom: &D, target: &D::Element) {
        if dom.closest(target, SITE_HEADER_CLASS).is_some() || !self.is_mobile(dom) {
            return;
        }
        self.collapse_all(dom);
    }

    /// Above the breakpoint the desktop stylesheet owns the panels, so inline
    /// overrides are dropped and toggles reset.
    pub fn resize(&self, dom: &D) {
        if self.is_mobile(dom) {
            return;
        }
        self.collapse_all(dom);
    }

    #[must_use]
    pub fn toggles(&self) -> &[NavToggle<D::Element>] {
        &self.toggles
    }

    fn collapse_all(&self, dom: &D) {
        for panel in dom.query_class(MAIN_NAV_CLASS) {
            dom.set_display(&panel, Display::Cleared);
        }
        for toggle in &self.toggles {
            set_aria_flag(dom, &toggle.button, ATTR_EXPANDED, false);
            if let Some(panel) = &toggle.panel {
                dom.set_display(panel, Display::Cleared);
            }
        }
    }
}

fn resolve_panel<D: Dom>(dom: &D, button: &D::Element) -> Option<D::Element> {
    match dom.attribute(button, ATTR_CONTROLS) {
        Some(id) => dom.element_by_id(&id),
        None => dom.parent(button).and_then(|parent| dom.find_in(&parent, MAIN_NAV_CLASS)),
    }
}
