//! Page behavior layer for the likenet static site.
//!
//! This crate is compiled to WebAssembly and attached to server-rendered
//! markup. It wires three independent controllers onto the page: the mobile
//! navigation toggles, the header dropdown menus, and the per-item like
//! buttons whose counts persist in `localStorage`. All controller logic is
//! written against the [`dom::Dom`] adapter and the [`storage::KeyValueStore`]
//! trait, so it runs natively in tests; the `hydrate` feature adds the
//! `web_sys` bindings and the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Owns the controllers; `init` / `handle` / `dispose` lifecycle |
//! | [`likes`] | Like records, toggle transition, and the likes controller |
//! | [`nav`] | Mobile navigation toggles |
//! | [`dropdown`] | Header dropdown menus |
//! | [`footer`] | Footer year stamp |
//! | [`storage`] | Key-value store trait and the typed likes store |
//! | [`dom`] | Document adapter used by every controller |
//! | [`config`] | Page-level overrides (storage key, breakpoint, log level) |
//! | [`consts`] | Markup contract names and defaults |
//! | `browser` | `web_sys` adapters and listener wiring (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod dropdown;
pub mod footer;
pub mod likes;
pub mod nav;
pub mod site;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod test_dom;
#[cfg(test)]
mod test_store;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install diagnostics, read page config, and mount.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = browser::read_config();
    let config = loaded.as_ref().ok().cloned().flatten().unwrap_or_default();
    let _ = console_log::init_with_level(config.level());
    if let Err(err) = &loaded {
        log::warn!("ignoring page config: {err}");
    }

    browser::install(config);
}

/// Remove every listener installed by [`start`] and flush pending likes.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn teardown() {
    browser::uninstall();
}
