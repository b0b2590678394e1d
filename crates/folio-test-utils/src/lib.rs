//! Testing utilities for the folio workspace
//!
//! [`FakeViewport`] is an in-memory host: a document of named rectangles,
//! a scroll offset, a manual clock, and registries for scroll listeners and
//! visibility watches. Nothing happens on its own; tests drive it with
//! [`FakeViewport::scroll_to`], [`FakeViewport::settle_scroll`] and
//! [`FakeViewport::run_intersection_check`].

#![allow(missing_docs)]

use folio_core::viewport::{
    intersection_ratio, BrowsingContext, ElementId, IntersectionEntry, ObserveOptions, Rect,
    ScrollBehavior, ScrollCallback, ViewportAdapter, VisibilityCallback, Watch,
};
use folio_core::{page::skill_card_id, Subscription, ViewportError};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Weak};

struct Observer {
    element: String,
    options: ObserveOptions,
    callback: Option<VisibilityCallback>,
}

struct Inner {
    viewport_height: f64,
    scroll: f64,
    now_ms: f64,
    coarse_pointer: bool,
    intersection_supported: bool,
    elements: HashMap<String, Rect>,
    pending_scroll: Option<f64>,
    scroll_listeners: BTreeMap<u64, Option<ScrollCallback>>,
    observers: BTreeMap<u64, Observer>,
    opened: Vec<(String, BrowsingContext)>,
    next_id: u64,
}

impl Inner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory viewport host
#[derive(Clone)]
pub struct FakeViewport {
    inner: Arc<Mutex<Inner>>,
}

impl FakeViewport {
    /// Empty document, viewport `height` px tall, scrolled to the top
    pub fn new(height: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                viewport_height: height,
                scroll: 0.0,
                now_ms: 0.0,
                coarse_pointer: false,
                intersection_supported: true,
                elements: HashMap::new(),
                pending_scroll: None,
                scroll_listeners: BTreeMap::new(),
                observers: BTreeMap::new(),
                opened: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Builder form of [`FakeViewport::add_element`]
    #[must_use]
    pub fn with_element(self, id: &str, top: f64, height: f64) -> Self {
        self.add_element(id, top, height);
        self
    }

    /// Host without intersection observation
    #[must_use]
    pub fn without_intersection(self) -> Self {
        self.inner.lock().intersection_supported = false;
        self
    }

    /// Host with a touch pointer
    #[must_use]
    pub fn with_coarse_pointer(self) -> Self {
        self.inner.lock().coarse_pointer = true;
        self
    }

    pub fn add_element(&self, id: &str, top: f64, height: f64) {
        self.inner.lock().elements.insert(id.to_string(), Rect::new(top, height));
    }

    pub fn remove_element(&self, id: &str) {
        self.inner.lock().elements.remove(id);
    }

    /// Shared handle for controllers
    pub fn adapter(&self) -> Arc<dyn ViewportAdapter> {
        Arc::new(self.clone())
    }

    pub fn advance_clock(&self, ms: f64) {
        self.inner.lock().now_ms += ms;
    }

    /// User scroll: jump to `offset`, cancelling any smooth scroll
    pub fn scroll_to(&self, offset: f64) {
        {
            let mut inner = self.inner.lock();
            inner.pending_scroll = None;
            inner.scroll = offset.max(0.0);
        }
        self.dispatch_scroll();
    }

    /// Target of the smooth scroll in flight
    pub fn pending_scroll(&self) -> Option<f64> {
        self.inner.lock().pending_scroll
    }

    /// Finish the smooth scroll in flight; `false` if none
    pub fn settle_scroll(&self) -> bool {
        {
            let mut inner = self.inner.lock();
            let Some(target) = inner.pending_scroll.take() else {
                return false;
            };
            inner.scroll = target;
        }
        self.dispatch_scroll();
        true
    }

    /// Deliver one observation to every active watch
    ///
    /// Mirrors a host rendering step: each watch receives the element's
    /// current visible fraction, whether or not it crossed a threshold.
    /// Returns the number of callbacks invoked.
    pub fn run_intersection_check(&self) -> usize {
        let batch: Vec<(u64, IntersectionEntry, VisibilityCallback)> = {
            let mut inner = self.inner.lock();
            let view = Rect::new(inner.scroll, inner.viewport_height);
            let now = inner.now_ms;
            let elements = inner.elements.clone();
            inner
                .observers
                .iter_mut()
                .filter_map(|(id, observer)| {
                    let rect = elements.get(&observer.element)?;
                    let ratio = intersection_ratio(*rect, view, observer.options.root_margin);
                    let callback = observer.callback.take()?;
                    Some((*id, IntersectionEntry { ratio, time_ms: now }, callback))
                })
                .collect()
        };

        let delivered = batch.len();
        for (id, entry, mut callback) in batch {
            let watch = callback(entry);
            let mut inner = self.inner.lock();
            match watch {
                Watch::Release => {
                    inner.observers.remove(&id);
                }
                Watch::Keep => {
                    if let Some(observer) = inner.observers.get_mut(&id) {
                        observer.callback = Some(callback);
                    }
                }
            }
        }
        delivered
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.inner.lock().scroll_listeners.len()
    }

    /// URLs handed to [`ViewportAdapter::open_external`], oldest first
    pub fn opened(&self) -> Vec<(String, BrowsingContext)> {
        self.inner.lock().opened.clone()
    }

    fn dispatch_scroll(&self) {
        let (offset, batch): (f64, Vec<(u64, ScrollCallback)>) = {
            let mut inner = self.inner.lock();
            let offset = inner.scroll;
            let batch = inner
                .scroll_listeners
                .iter_mut()
                .filter_map(|(id, slot)| slot.take().map(|cb| (*id, cb)))
                .collect();
            (offset, batch)
        };

        for (id, mut callback) in batch {
            callback(offset);
            if let Some(slot) = self.inner.lock().scroll_listeners.get_mut(&id) {
                *slot = Some(callback);
            }
        }
    }

    fn registration(&self, remove: fn(&mut Inner, u64), id: u64) -> Subscription {
        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                remove(&mut inner.lock(), id);
            }
        })
    }
}

impl ViewportAdapter for FakeViewport {
    fn now_ms(&self) -> f64 {
        self.inner.lock().now_ms
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.lock().scroll
    }

    fn on_scroll(&self, callback: ScrollCallback) -> Subscription {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_id();
            inner.scroll_listeners.insert(id, Some(callback));
            id
        };
        self.registration(
            |inner, id| {
                inner.scroll_listeners.remove(&id);
            },
            id,
        )
    }

    fn scroll_to_element(&self, id: &str, behavior: ScrollBehavior) -> bool {
        {
            let mut inner = self.inner.lock();
            let Some(rect) = inner.elements.get(id).copied() else {
                return false;
            };
            let target = rect.top.max(0.0);
            if behavior == ScrollBehavior::Smooth {
                inner.pending_scroll = Some(target);
                return true;
            }
            inner.pending_scroll = None;
            inner.scroll = target;
        }
        self.dispatch_scroll();
        true
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.inner.lock().elements.get(id).map(|r| r.top)
    }

    fn matches_coarse_pointer(&self) -> bool {
        self.inner.lock().coarse_pointer
    }

    fn observe(
        &self,
        element: &ElementId,
        options: ObserveOptions,
        on_visible: VisibilityCallback,
    ) -> Result<Subscription, ViewportError> {
        let id = {
            let mut inner = self.inner.lock();
            if !inner.intersection_supported {
                return Err(ViewportError::ObservationUnsupported);
            }
            if !inner.elements.contains_key(element.as_str()) {
                return Err(ViewportError::UnknownElement(element.as_str().to_string()));
            }
            let id = inner.next_id();
            inner.observers.insert(
                id,
                Observer {
                    element: element.as_str().to_string(),
                    options,
                    callback: Some(on_visible),
                },
            );
            id
        };
        Ok(self.registration(
            |inner, id| {
                inner.observers.remove(&id);
            },
            id,
        ))
    }

    fn open_external(&self, url: &str, context: BrowsingContext) {
        self.inner.lock().opened.push((url.to_string(), context));
    }
}

/// Height of each stacked section in [`page_layout`]
pub const SECTION_HEIGHT: f64 = 1000.0;

/// Viewport height used by [`page_layout`]
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// Document with a hero followed by every content section stacked
/// [`SECTION_HEIGHT`] apart, and the skill cards laid out in one row
/// inside the skills section
pub fn page_layout() -> FakeViewport {
    let viewport = FakeViewport::new(VIEWPORT_HEIGHT).with_element("hero", 0.0, SECTION_HEIGHT);
    let mut skills_top = None;
    for (i, section) in folio_content::sections().iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let top = SECTION_HEIGHT * (i + 1) as f64;
        viewport.add_element(section.id, top, SECTION_HEIGHT);
        if section.id == "skills" {
            skills_top = Some(top);
        }
    }
    if let Some(top) = skills_top {
        for i in 0..folio_content::profile().skills.len() {
            viewport.add_element(&skill_card_id(i), top + 300.0, 250.0);
        }
    }
    viewport
}

/// Top of `id` in [`page_layout`]
pub fn layout_top(viewport: &FakeViewport, id: &str) -> f64 {
    viewport.element_top(id).unwrap_or_else(|| panic!("no element {id} in layout"))
}
