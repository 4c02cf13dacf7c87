//! Tool configuration and activation handle.
//!
//! [`PolySelectTool`] is the immutable-after-construction description of the
//! lasso: identity, icon, triggering gesture family, stacking order, the
//! optional selection callback and the shared overlay shape.  Activation is
//! deliberately *not* a field on the config: hosts toggle tools on and off
//! at runtime, so it lives in a separate [`ToolActivation`] handle the
//! controller subscribes to.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use egui_phosphor::regular::POLYGON;
use once_cell::sync::Lazy;

use crate::events::Gesture;
use crate::host::SelectionCallback;
use crate::overlay::{OverlayStyle, PolyOverlay};

/// Configuration for the polygon lasso selection tool.
pub struct PolySelectTool {
    /// Identity tag shown in toolbars and used by host tool registries.
    pub tool_name: &'static str,
    /// Toolbar icon (phosphor glyph).
    pub icon: &'static str,
    /// Gesture family this tool listens to.
    pub event_type: Gesture,
    /// Stacking priority among tools; lower values receive events first.
    pub default_order: i32,
    /// Invoked with the data-space-enriched geometry after a finalized,
    /// non-empty selection.
    pub callback: Option<Arc<dyn SelectionCallback>>,
    /// The preview overlay, shared with the controller.
    pub overlay: Arc<Mutex<PolyOverlay>>,
}

impl PolySelectTool {
    pub fn new() -> Self {
        Self {
            tool_name: "Poly Select",
            icon: POLYGON,
            event_type: Gesture::Tap,
            default_order: 11,
            callback: None,
            overlay: Arc::new(Mutex::new(PolyOverlay::new())),
        }
    }

    pub fn with_callback(mut self, callback: Arc<dyn SelectionCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn with_overlay(mut self, overlay: PolyOverlay) -> Self {
        self.overlay = Arc::new(Mutex::new(overlay));
        self
    }

    pub fn with_overlay_style(self, style: OverlayStyle) -> Self {
        self.with_overlay(PolyOverlay::with_style(style))
    }

    pub fn with_order(mut self, default_order: i32) -> Self {
        self.default_order = default_order;
        self
    }
}

impl Default for PolySelectTool {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property definitions
// ─────────────────────────────────────────────────────────────────────────────

/// Descriptor for an externally configurable tool field, for host tool
/// registries that enumerate what can be set on a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub type_name: &'static str,
    pub has_default: bool,
}

static PROPERTIES: Lazy<Vec<PropertyDef>> = Lazy::new(|| {
    vec![
        PropertyDef {
            name: "callback",
            type_name: "SelectionCallback",
            has_default: false,
        },
        PropertyDef {
            name: "overlay",
            type_name: "PolyOverlay",
            has_default: true,
        },
    ]
});

/// The externally configurable fields of [`PolySelectTool`].
pub fn properties() -> &'static [PropertyDef] {
    &PROPERTIES
}

// ─────────────────────────────────────────────────────────────────────────────
// ToolActivation
// ─────────────────────────────────────────────────────────────────────────────

struct ActivationInner {
    active: bool,
    listeners: Vec<Sender<bool>>,
}

/// Shared activation toggle with change notification.
///
/// Hosts flip the toggle (toolbar button, programmatic control); the
/// controller subscribes at construction and clears its transient state when
/// it observes a deactivation.  Follows the subscribe pattern of the other
/// controller handles in this ecosystem: listeners receive every *change*,
/// and dropped receivers are pruned on the next notification.
#[derive(Clone)]
pub struct ToolActivation {
    inner: Arc<Mutex<ActivationInner>>,
}

impl ToolActivation {
    /// Create a fresh handle; tools start inactive.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(ActivationInner {
                active: false,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.lock().unwrap().active
    }

    /// Set the activation state, notifying subscribers on change.
    pub fn set_active(&self, active: bool) {
        let mut inner = self.inner.lock().unwrap();
        if inner.active == active {
            return;
        }
        inner.active = active;
        inner.listeners.retain(|tx| tx.send(active).is_ok());
    }

    /// Subscribe to activation changes.
    pub fn subscribe(&self) -> Receiver<bool> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }
}

impl Default for ToolActivation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_defaults() {
        let tool = PolySelectTool::new();
        assert_eq!(tool.tool_name, "Poly Select");
        assert_eq!(tool.event_type, Gesture::Tap);
        assert_eq!(tool.default_order, 11);
        assert!(tool.callback.is_none());
        assert!(tool.overlay.lock().unwrap().is_blank());
    }

    #[test]
    fn property_table_lists_configurable_fields() {
        let names: Vec<&str> = properties().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["callback", "overlay"]);
        assert!(!properties()[0].has_default);
        assert!(properties()[1].has_default);
    }

    #[test]
    fn activation_notifies_on_change_only() {
        let activation = ToolActivation::new();
        let rx = activation.subscribe();

        activation.set_active(false); // no change, no event
        assert!(rx.try_recv().is_err());

        activation.set_active(true);
        assert_eq!(rx.try_recv(), Ok(true));
        assert!(activation.is_active());

        activation.set_active(false);
        assert_eq!(rx.try_recv(), Ok(false));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_subscriber_is_pruned() {
        let activation = ToolActivation::new();
        let rx = activation.subscribe();
        drop(rx);
        activation.set_active(true);
        assert_eq!(activation.inner.lock().unwrap().listeners.len(), 0);
    }
}
