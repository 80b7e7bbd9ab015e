//! `<burger-menu>` element upgrade for static pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages author plain markup inside `<burger-menu>`. [`register`] upgrades
//! every such element once per page: each gets a core [`Disclosure`] over a
//! [`DomHost`], a click listener on its trigger and a document `focusin`
//! listener. A `MutationObserver` upgrades elements inserted later and drops
//! instances whose element left the document, removing their listeners.
//!
//! Handlers borrow the disclosure with `try_borrow_mut` and skip the event if
//! it is already borrowed.

use std::cell::RefCell;
use std::rc::Rc;

use burger_menu::config::PanelConfig;
use burger_menu::consts::{FOCUSABLE_SELECTOR, TAG_NAME};
use burger_menu::disclosure::{Disclosure, PanelHost};
use burger_menu::markup::Marker;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, MutationObserver, MutationObserverInit, MutationRecord};

use crate::util::upgrade::next_pending;

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;
type MutationClosure = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// [`PanelHost`] over a live `<burger-menu>` element.
pub struct DomHost {
    element: Element,
}

impl DomHost {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl PanelHost for DomHost {
    type Node = Element;

    fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn find(&self, marker: Marker) -> Option<Element> {
        self.element.query_selector(&marker.selector()).ok().flatten()
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node.as_ref();
        ancestor.contains(Some(node))
    }

    fn focusable_elements(&self, within: &Element) -> Vec<Element> {
        let Ok(list) = within.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn contains_active_element(&self) -> bool {
        let Some(active) = self.element.owner_document().and_then(|doc| doc.active_element()) else {
            return false;
        };
        let active: &web_sys::Node = active.as_ref();
        self.element.contains(Some(active))
    }
}

/// An upgraded element and the listeners wired to it.
pub struct BurgerMenuElement {
    element: Element,
    panel: Rc<RefCell<Disclosure<DomHost>>>,
    listeners: Vec<(EventTarget, &'static str, EventClosure)>,
}

impl BurgerMenuElement {
    /// Render the shell into `element` and wire events. A structural mismatch
    /// leaves the element's markup untouched and unwired.
    pub fn connect(element: Element, document: &Document) -> Self {
        let config = PanelConfig::from_attributes(|name| element.get_attribute(name));
        let host = Rc::new(DomHost::new(element.clone()));
        let mut disclosure = Disclosure::new(host, config);
        let attached = disclosure.attach().is_ok();

        let mut this = Self {
            element,
            panel: Rc::new(RefCell::new(disclosure)),
            listeners: Vec::new(),
        };
        if attached {
            this.wire(document);
        }
        this
    }

    fn wire(&mut self, document: &Document) {
        let Some(trigger) = self.panel.borrow().parts().map(|parts| parts.trigger.clone()) else {
            return;
        };

        let panel = Rc::clone(&self.panel);
        let on_click = EventClosure::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            if let Ok(mut panel) = panel.try_borrow_mut() {
                panel.on_trigger_click();
            }
        });
        self.listen(trigger.into(), "click", on_click);

        let panel = Rc::clone(&self.panel);
        let on_focus_in = EventClosure::new(move |_ev: web_sys::Event| {
            if let Ok(mut panel) = panel.try_borrow_mut() {
                panel.on_focus_in();
            }
        });
        self.listen(document.clone().into(), "focusin", on_focus_in);
    }

    fn listen(&mut self, target: EventTarget, event: &'static str, closure: EventClosure) {
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((target, event, closure));
        } else {
            log::warn!("failed to add {event} listener to burger menu");
        }
    }
}

impl Drop for BurgerMenuElement {
    fn drop(&mut self) {
        for (target, event, closure) in self.listeners.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        if let Ok(mut panel) = self.panel.try_borrow_mut() {
            panel.detach();
        }
    }
}

struct Registry {
    document: Document,
    instances: Vec<BurgerMenuElement>,
    _observer: Option<(MutationObserver, MutationClosure)>,
}

impl Registry {
    /// Upgrade `scope` and its `<burger-menu>` descendants. The list is
    /// queried again after every upgrade since rendering replaces nested
    /// elements.
    fn upgrade_within(&mut self, scope: &Element) {
        while let Some(element) = self.pending_in(scope) {
            self.upgrade(element);
        }
    }

    fn pending_in(&self, scope: &Element) -> Option<Element> {
        let this = scope.tag_name().eq_ignore_ascii_case(TAG_NAME).then(|| scope.clone());
        let nested = scope.query_selector_all(TAG_NAME).ok().map_or_else(Vec::new, |list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        });
        next_pending(
            this.into_iter().chain(nested),
            |element| element.is_connected(),
            |element| self.is_upgraded(element),
        )
    }

    fn is_upgraded(&self, element: &Element) -> bool {
        self.instances.iter().any(|instance| instance.element == *element)
    }

    fn upgrade(&mut self, element: Element) {
        if !element.is_connected() || self.is_upgraded(&element) {
            return;
        }
        log::debug!("upgrading <{TAG_NAME}> element");
        let instance = BurgerMenuElement::connect(element, &self.document);
        self.instances.push(instance);
    }

    fn drop_disconnected(&mut self) {
        self.instances.retain(|instance| instance.element.is_connected());
    }
}

thread_local! {
    static REGISTRY: RefCell<Option<Registry>> = const { RefCell::new(None) };
}

/// Upgrade all `<burger-menu>` elements in the document, now and later.
///
/// Returns `false` when already registered or when no document is available.
pub fn register() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let fresh = REGISTRY.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(Registry {
            document: document.clone(),
            instances: Vec::new(),
            _observer: None,
        });
        true
    });
    if !fresh {
        return false;
    }

    // Observe before the first pass so elements inserted by an upgrade are
    // seen too.
    let observer = observe_document(&document);
    with_registry(|registry| registry._observer = observer);

    if let Some(root) = document.document_element() {
        with_registry(|registry| registry.upgrade_within(&root));
    }
    true
}

fn with_registry(f: impl FnOnce(&mut Registry)) {
    REGISTRY.with(|cell| {
        if let Some(registry) = cell.borrow_mut().as_mut() {
            f(registry);
        }
    });
}

fn observe_document(document: &Document) -> Option<(MutationObserver, MutationClosure)> {
    let on_mutation = MutationClosure::new(|records: js_sys::Array, _observer: MutationObserver| {
        with_registry(|registry| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<MutationRecord>() else {
                    continue;
                };
                let added = record.added_nodes();
                for node in (0..added.length()).filter_map(|i| added.item(i)) {
                    if let Ok(element) = node.dyn_into::<Element>() {
                        registry.upgrade_within(&element);
                    }
                }
            }
            registry.drop_disconnected();
        });
    });

    let observer = match MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("MutationObserver unavailable: {err:?}");
            return None;
        }
    };
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    let target = document.document_element()?;
    if let Err(err) = observer.observe_with_options(&target, &options) {
        log::warn!("failed to observe document: {err:?}");
        return None;
    }
    Some((observer, on_mutation))
}
