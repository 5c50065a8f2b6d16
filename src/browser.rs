//! Browser bindings: `web_sys` implementations of the document adapter and
//! the key-value store, plus the listener wiring that feeds [`SiteEvent`]s
//! into a mounted [`Site`].
//!
//! Listeners are kept alongside the closures that back them so `teardown`
//! can remove every one of them. The site is shared between closures through
//! `Rc<RefCell<_>>`; an event that arrives while the site is already borrowed
//! is dropped rather than panicking.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node, Storage, Window};

use crate::config::{Config, ConfigError};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::dom::{Display, Dom};
use crate::footer::stamp_year;
use crate::site::{Site, SiteEvent};
use crate::storage::{KeyValueStore, StorageError};

type WebSite = Site<WebDom, LocalStorage>;

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

// =============================================================
// Document adapter
// =============================================================

/// The live page behind the [`Dom`] adapter.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the current window, if there is one with a document.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn query_class(&self, class: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&format!(".{class}")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, el: &Element) -> Option<Element> {
        el.parent_element()
    }

    fn find_in(&self, root: &Element, class: &str) -> Option<Element> {
        root.query_selector(&format!(".{class}")).ok().flatten()
    }

    fn closest(&self, el: &Element, class: &str) -> Option<Element> {
        el.closest(&format!(".{class}")).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, el: &Element) -> bool {
        let node: &Node = el;
        ancestor.contains(Some(node))
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        if let Err(err) = el.set_attribute(name, value) {
            log::debug!("set_attribute({name}) failed: {}", describe(&err));
        }
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_display(&self, el: &Element, display: Display) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        let result = match display {
            Display::Cleared => style.remove_property("display").map(|_| ()),
            Display::Block | Display::Hidden => style.set_property("display", display.css_value()),
        };
        if let Err(err) = result {
            log::debug!("setting display failed: {}", describe(&err));
        }
    }

    fn viewport_width(&self) -> f64 {
        self.window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default()
    }
}

// =============================================================
// localStorage
// =============================================================

/// `window.localStorage`, which may be missing (privacy modes, sandboxed
/// iframes). A missing store fails every call with `Unavailable`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| StorageError::Read(describe(&err)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| StorageError::Write(describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================
// Config
// =============================================================

/// Read the inline `#likenet-config` JSON, if the page has one.
pub fn read_config() -> Result<Option<Config>, ConfigError> {
    let Some(el) = WebDom::new().and_then(|dom| dom.element_by_id(CONFIG_ELEMENT_ID)) else {
        return Ok(None);
    };
    let raw = el.text_content().unwrap_or_default();
    Config::from_json(&raw).map(Some)
}

// =============================================================
// Mounting
// =============================================================

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// A site wired to the live page. Must be kept alive for as long as its
/// listeners are registered; [`Mounted::dispose`] unregisters them first.
pub struct Mounted {
    dom: Rc<WebDom>,
    site: Rc<RefCell<WebSite>>,
    listeners: Vec<Listener>,
}

impl Mounted {
    /// Route `kind` events on `target` into the site. `to_event` turns the
    /// raw DOM event into a [`SiteEvent`], or `None` to ignore it.
    fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, to_event: F)
    where
        F: Fn(&Event) -> Option<SiteEvent<Element>> + 'static,
    {
        let dom = Rc::clone(&self.dom);
        let site = Rc::clone(&self.site);
        let callback = Closure::wrap(Box::new(move |ev: Event| {
            let Some(event) = to_event(&ev) else {
                return;
            };
            let Ok(mut site) = site.try_borrow_mut() else {
                log::debug!("dropping {kind} event during another handler");
                return;
            };
            if site.handle(&dom, event) {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        match target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
            Ok(()) => self.listeners.push(Listener { target: target.clone(), kind, callback }),
            Err(err) => log::warn!("failed to add {kind} listener: {}", describe(&err)),
        }
    }

    /// Remove every listener and flush the likes map.
    pub fn dispose(self) {
        for listener in &self.listeners {
            let _ = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.callback.as_ref().unchecked_ref());
        }
        drop(self.listeners);
        match Rc::try_unwrap(self.site) {
            Ok(site) => {
                let _ = site.into_inner().dispose();
            }
            Err(shared) => {
                if let Ok(mut site) = shared.try_borrow_mut() {
                    let _ = site.likes.flush();
                }
            }
        }
    }
}

/// Build the site from the current page and attach its listeners.
pub fn mount(config: &Config) -> Option<Mounted> {
    let dom = WebDom::new()?;
    let storage = LocalStorage::open(dom.window());
    let site = Site::init(&dom, storage, config);
    stamp_year(&dom, js_sys::Date::new_0().get_full_year());

    let targets = Targets::collect(&site);
    let window: EventTarget = dom.window().clone().into();
    let document: EventTarget = dom.document().clone().into();

    let mut mounted = Mounted { dom: Rc::new(dom), site: Rc::new(RefCell::new(site)), listeners: Vec::new() };

    for (index, button) in targets.nav.into_iter().enumerate() {
        mounted.listen(&button, "click", move |_| Some(SiteEvent::NavToggle(index)));
    }
    for (index, button) in targets.dropdowns.into_iter().enumerate() {
        mounted.listen(&button, "click", move |_| Some(SiteEvent::DropdownToggle(index)));
    }
    for (index, button) in targets.likes.into_iter().enumerate() {
        mounted.listen(&button, "click", move |_| Some(SiteEvent::Like(index)));
        mounted.listen(&button, "keydown", move |ev| {
            let key = ev.dyn_ref::<KeyboardEvent>()?.key();
            Some(SiteEvent::LikeKey { index, key })
        });
    }

    mounted.listen(&document, "click", |ev| click_target(ev).map(SiteEvent::NavDocumentClick));
    mounted.listen(&document, "click", |ev| click_target(ev).map(SiteEvent::DropdownDocumentClick));
    mounted.listen(&window, "resize", |_| Some(SiteEvent::Resize));
    mounted.listen(&window, "beforeunload", |_| Some(SiteEvent::BeforeUnload));

    log::debug!("mounted {} listeners", mounted.listeners.len());
    Some(mounted)
}

/// Buttons that get a per-control listener, in controller index order.
struct Targets {
    nav: Vec<EventTarget>,
    dropdowns: Vec<EventTarget>,
    likes: Vec<EventTarget>,
}

impl Targets {
    fn collect(site: &WebSite) -> Self {
        Self {
            nav: site.nav.toggles().iter().map(|t| t.button.clone().into()).collect(),
            dropdowns: site.dropdowns.dropdowns().iter().map(|d| d.button.clone().into()).collect(),
            likes: site.likes.controls().iter().map(|c| c.button.clone().into()).collect(),
        }
    }
}

fn click_target(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

// =============================================================
// Global slot
// =============================================================

/// Mount into the global slot now, or once the document finishes parsing.
pub fn install(config: Config) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document to attach to");
        return;
    };
    if document.ready_state() != "loading" {
        mount_into_slot(&config);
        return;
    }
    let on_ready = Closure::once_into_js(move || mount_into_slot(&config));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("failed to wait for DOMContentLoaded: {}", describe(&err));
    }
}

/// Dispose the globally mounted site, if any.
pub fn uninstall() {
    if let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        mounted.dispose();
    }
}

fn mount_into_slot(config: &Config) {
    uninstall();
    let mounted = mount(config);
    MOUNTED.with(|slot| *slot.borrow_mut() = mounted);
}
