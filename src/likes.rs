//! Like buttons: the per-item record, its toggle transition, and the
//! controller that keeps the page and the persisted map in step.
//!
//! The map is read once at init and stays the source of truth for the page.
//! Every toggle repaints the affected buttons and rewrites the whole map to
//! storage; a failed write is logged and otherwise ignored, so the counts on
//! screen never depend on storage being available.

#[cfg(test)]
#[path = "likes_test.rs"]
mod likes_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{ATTR_LIKE_ID, ATTR_PRESSED, LIKE_BUTTON_CLASS, LIKE_COUNT_CLASS};
use crate::dom::{Dom, set_aria_flag};
use crate::storage::{KeyValueStore, LikeStore, StorageError};

/// Like state for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikeRecord {
    /// Total likes shown for the item, including ours when `liked`.
    pub count: u32,
    /// Whether this browser has liked the item.
    pub liked: bool,
}

impl LikeRecord {
    /// Flip `liked`, adding or removing our like from `count`.
    ///
    /// Unliking never takes `count` below zero.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.liked {
            Self { count: self.count.saturating_sub(1), liked: false }
        } else {
            Self { count: self.count.saturating_add(1), liked: true }
        }
    }
}

/// Item identifier to like record.
pub type LikeMap = BTreeMap<String, LikeRecord>;

/// Keys that activate a focused like button.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// One like button bound to an item.
#[derive(Debug, Clone)]
pub struct LikeControl<E> {
    pub id: String,
    pub button: E,
    pub label: E,
}

pub struct LikesController<D: Dom, S> {
    store: LikeStore<S>,
    state: LikeMap,
    controls: Vec<LikeControl<D::Element>>,
}

impl<D: Dom, S: KeyValueStore> LikesController<D, S> {
    /// Restore the saved map and paint every like button on the page.
    ///
    /// A button without a `data-id` or without a `.like-count` child is left
    /// unbound.
    pub fn init(dom: &D, store: LikeStore<S>) -> Self {
        let mut state = store.load().unwrap_or_else(|err| {
            log::warn!("failed to read saved likes, starting empty: {err}");
            LikeMap::new()
        });

        let mut controls = Vec::new();
        for button in dom.query_class(LIKE_BUTTON_CLASS) {
            let Some(id) = dom.attribute(&button, ATTR_LIKE_ID).filter(|id| !id.is_empty()) else {
                log::debug!("skipping like button without {ATTR_LIKE_ID}");
                continue;
            };
            let Some(label) = dom.find_in(&button, LIKE_COUNT_CLASS) else {
                log::debug!("skipping like button {id:?} without .{LIKE_COUNT_CLASS}");
                continue;
            };
            let record = *state.entry(id.clone()).or_default();
            let control = LikeControl { id, button, label };
            paint(dom, &control, record);
            controls.push(control);
        }

        Self { store, state, controls }
    }

    // --- Events ---

    /// Toggle the item behind control `index` and persist the map.
    ///
    /// Returns the new record, or `None` for an unknown index.
    pub fn activate(&mut self, dom: &D, index: usize) -> Option<LikeRecord> {
        let id = self.controls.get(index)?.id.clone();
        let record = self.state.get(&id).copied().unwrap_or_default().toggled();
        self.state.insert(id.clone(), record);

        for control in self.controls.iter().filter(|c| c.id == id) {
            paint(dom, control, record);
        }

        // In-memory state stays authoritative when the write fails.
        let _ = self.flush();
        Some(record)
    }

    /// Keyboard activation. Returns `true` when the key toggled the item and
    /// the browser default (scroll on Space, submit on Enter) must be
    /// suppressed.
    pub fn key_down(&mut self, dom: &D, index: usize, key: &str) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        self.activate(dom, index).is_some()
    }

    /// Write the whole map to storage, logging on failure.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.store
            .save(&self.state)
            .inspect_err(|err| log::warn!("failed to save likes: {err}"))
    }

    // --- Queries ---

    #[must_use]
    pub fn record(&self, id: &str) -> Option<LikeRecord> {
        self.state.get(id).copied()
    }

    #[must_use]
    pub fn state(&self) -> &LikeMap {
        &self.state
    }

    #[must_use]
    pub fn controls(&self) -> &[LikeControl<D::Element>] {
        &self.controls
    }

    #[must_use]
    pub fn store(&self) -> &LikeStore<S> {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> LikeStore<S> {
        self.store
    }
}

fn paint<D: Dom>(dom: &D, control: &LikeControl<D::Element>, record: LikeRecord) {
    set_aria_flag(dom, &control.button, ATTR_PRESSED, record.liked);
    dom.set_text(&control.label, &record.count.to_string());
}
