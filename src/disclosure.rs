//! Disclosure panel lifecycle: attach, toggle, focus containment, detach.
//!
//! DESIGN
//! ======
//! [`Disclosure`] owns the panel state and talks to the document only through
//! a [`PanelHost`], so the whole state machine runs without a browser. The
//! `client` crate implements the host over a live `<burger-menu>` element.
//!
//! Status changes flow through an [`Observable`]: its single listener writes
//! the status attributes, and it stays quiet when a set does not change the
//! value.
//!
//! A structural mismatch after render restores the original markup and leaves
//! the panel static. It is reported as a `Result` for callers that care and
//! logged at `warn`; the browser glue ignores it.

use std::rc::Rc;

use crate::config::PanelConfig;
use crate::markup::{self, Marker};
use crate::observe::Observable;
use crate::status::{PanelStatus, Transition};

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Error returned by [`Disclosure::attach`] when the rendered shell is not
/// usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("burger menu root element not found after render")]
    MissingRoot,
    #[error("burger menu trigger not found after render")]
    MissingTrigger,
    #[error("burger menu panel not found after render")]
    MissingPanel,
    /// A marker was found but not inside the root, e.g. author markup closed
    /// the wrapper early.
    #[error("burger menu {0:?} element is outside the root")]
    Detached(Marker),
}

/// Document access for one disclosure panel element.
///
/// Methods take `&self`; DOM handles are shared references and fakes use
/// interior mutability.
pub trait PanelHost {
    type Node: Clone;

    /// Current inner markup of the host element.
    fn inner_html(&self) -> String;

    /// Replace the inner markup of the host element.
    fn set_inner_html(&self, html: &str);

    /// First descendant carrying `marker`.
    fn find(&self, marker: Marker) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Focusable descendants of `within`, in document order.
    fn focusable_elements(&self, within: &Self::Node) -> Vec<Self::Node>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Whether the document's active element lies inside the host element.
    fn contains_active_element(&self) -> bool;
}

/// Elements located after render.
#[derive(Clone, Debug)]
pub struct Parts<N> {
    pub root: N,
    pub trigger: N,
    pub panel: N,
}

impl<N> Parts<N> {
    fn node(&self, marker: Marker) -> &N {
        match marker {
            Marker::Root => &self.root,
            Marker::Trigger => &self.trigger,
            Marker::Panel => &self.panel,
        }
    }
}

/// One disclosure panel bound to a host element.
pub struct Disclosure<H: PanelHost> {
    host: Rc<H>,
    config: PanelConfig,
    status: Observable<PanelStatus>,
    enabled: bool,
    initial_markup: String,
    parts: Option<Parts<H::Node>>,
    focusable: Vec<H::Node>,
}

impl<H: PanelHost + 'static> Disclosure<H> {
    /// Create an unattached panel. Status starts open and interaction is off.
    #[must_use]
    pub fn new(host: Rc<H>, config: PanelConfig) -> Self {
        Self {
            host,
            config,
            status: Observable::new(PanelStatus::Open),
            enabled: false,
            initial_markup: String::new(),
            parts: None,
            focusable: Vec::new(),
        }
    }

    /// Capture the author's markup, render the shell around it and wire the
    /// interactive behavior.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] when the trigger, the panel or the root is
    /// missing after render, or when the trigger or panel is not inside the
    /// root. The original markup has already been restored by then.
    pub fn attach(&mut self) -> Result<(), StructureError> {
        self.initial_markup = self.host.inner_html();
        self.host.set_inner_html(&markup::render_shell(&self.initial_markup));

        match self.locate_parts() {
            Ok(parts) => {
                self.wire(parts);
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; restoring original markup");
                self.host.set_inner_html(&self.initial_markup);
                self.enabled = false;
                Err(err)
            }
        }
    }

    fn locate_parts(&self) -> Result<Parts<H::Node>, StructureError> {
        let trigger = self.host.find(Marker::Trigger).ok_or(StructureError::MissingTrigger)?;
        let panel = self.host.find(Marker::Panel).ok_or(StructureError::MissingPanel)?;
        let root = self.host.find(Marker::Root).ok_or(StructureError::MissingRoot)?;

        if !self.host.contains(&root, &trigger) {
            return Err(StructureError::Detached(Marker::Trigger));
        }
        if !self.host.contains(&root, &panel) {
            return Err(StructureError::Detached(Marker::Panel));
        }
        Ok(Parts { root, trigger, panel })
    }

    fn wire(&mut self, parts: Parts<H::Node>) {
        self.focusable = self.host.focusable_elements(&parts.panel);

        let host = Rc::clone(&self.host);
        let listener_parts = parts.clone();
        self.status.subscribe(move |old, new| {
            log::debug!("burger menu {old} -> {new}");
            apply_status(host.as_ref(), &listener_parts, *new);
        });
        self.parts = Some(parts);
        self.enabled = true;

        // Settle into the configured status. Starting from open, a closed
        // default fires the listener; an open default needs one explicit sync.
        if !self.toggle(Some(self.config.initial)) {
            self.sync_attributes();
        }
    }

    fn sync_attributes(&self) {
        if let Some(parts) = self.parts.as_ref() {
            apply_status(self.host.as_ref(), parts, *self.status.get());
        }
    }

    /// Set the status to `target`, or invert it when `target` is `None`.
    ///
    /// Returns whether the status changed; attributes are written only then.
    pub fn toggle(&mut self, target: Option<PanelStatus>) -> bool {
        self.status.update(|current| current.next(target))
    }

    /// Apply a state-machine transition.
    pub fn handle(&mut self, transition: Transition) -> bool {
        self.status.update(|current| transition.apply(*current))
    }

    /// Trigger click: invert. The caller prevents the default button action.
    pub fn on_trigger_click(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.handle(Transition::TriggerClick)
    }

    /// Document-level `focusin`: close when focus left the component.
    pub fn on_focus_in(&mut self) -> bool {
        if !self.enabled || self.host.contains_active_element() {
            return false;
        }
        self.handle(Transition::ExternalFocus)
    }

    /// Recompute the focusable set from the panel's current content.
    pub fn refresh_focusable(&mut self) {
        if let Some(parts) = self.parts.as_ref() {
            self.focusable = self.host.focusable_elements(&parts.panel);
        }
    }

    /// Stop reacting to events and drop references to rendered elements.
    pub fn detach(&mut self) {
        self.status.unsubscribe();
        self.enabled = false;
        self.parts = None;
        self.focusable.clear();
    }

    // --- Queries ---

    #[must_use]
    pub fn status(&self) -> PanelStatus {
        *self.status.get()
    }

    /// Whether interactive behavior is live (false in static fallback).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn max_width(&self) -> i64 {
        self.config.max_width
    }

    /// Markup the element held before attach.
    #[must_use]
    pub fn initial_markup(&self) -> &str {
        &self.initial_markup
    }

    #[must_use]
    pub fn parts(&self) -> Option<&Parts<H::Node>> {
        self.parts.as_ref()
    }

    #[must_use]
    pub fn focusable_elements(&self) -> &[H::Node] {
        &self.focusable
    }
}

fn apply_status<H: PanelHost>(host: &H, parts: &Parts<H::Node>, status: PanelStatus) {
    for (marker, name, value) in markup::status_attributes(status) {
        host.set_attribute(parts.node(marker), name, value);
    }
}
