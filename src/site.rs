//! The assembled page: all three controllers behind one lifecycle.
//!
//! `Site` is built once per page load, receives every page event as a
//! [`SiteEvent`], and is disposed when the page goes away. Controllers are
//! independent of each other; `Site` only routes.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::Config;
use crate::dom::Dom;
use crate::dropdown::DropdownController;
use crate::likes::LikesController;
use crate::nav::NavController;
use crate::storage::{KeyValueStore, LikeStore};

/// A page event, already resolved to the control it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent<E> {
    /// Click on nav toggle `index`.
    NavToggle(usize),
    /// Click on dropdown button `index`.
    DropdownToggle(usize),
    /// Click on like button `index`.
    Like(usize),
    /// Key press on like button `index`.
    LikeKey { index: usize, key: String },
    /// Document-level click seen by the nav listener.
    NavDocumentClick(E),
    /// Document-level click seen by the dropdown listener.
    DropdownDocumentClick(E),
    /// Window resize.
    Resize,
    /// Page is about to unload.
    BeforeUnload,
}

pub struct Site<D: Dom, S> {
    pub nav: NavController<D>,
    pub dropdowns: DropdownController<D>,
    pub likes: LikesController<D, S>,
}

impl<D: Dom, S: KeyValueStore> Site<D, S> {
    pub fn init(dom: &D, storage: S, config: &Config) -> Self {
        Self {
            nav: NavController::init(dom, config.mobile_breakpoint_px),
            dropdowns: DropdownController::init(dom),
            likes: LikesController::init(dom, LikeStore::new(storage, config.storage_key.clone())),
        }
    }

    /// Route one event. Returns `true` when the browser default action must
    /// be prevented.
    pub fn handle(&mut self, dom: &D, event: SiteEvent<D::Element>) -> bool {
        match event {
            SiteEvent::NavToggle(index) => {
                self.nav.activate(dom, index);
            }
            SiteEvent::DropdownToggle(index) => {
                self.dropdowns.activate(dom, index);
            }
            SiteEvent::Like(index) => {
                self.likes.activate(dom, index);
            }
            SiteEvent::LikeKey { index, key } => {
                if !self.likes.key_down(dom, index, &key) {
                    return false;
                }
                // The suppressed key default is the click the document
                // listeners would have seen; replay it to them.
                if let Some(button) = self.likes.controls().get(index).map(|c| c.button.clone()) {
                    self.nav.document_click(dom, &button);
                    self.dropdowns.document_click(dom, &button);
                }
                return true;
            }
            SiteEvent::NavDocumentClick(target) => self.nav.document_click(dom, &target),
            SiteEvent::DropdownDocumentClick(target) => self.dropdowns.document_click(dom, &target),
            SiteEvent::Resize => self.nav.resize(dom),
            SiteEvent::BeforeUnload => {
                let _ = self.likes.flush();
            }
        }
        false
    }

    /// Flush likes one last time and hand back the storage backend.
    #[must_use]
    pub fn dispose(mut self) -> S {
        let _ = self.likes.flush();
        self.likes.into_store().into_backend()
    }
}
