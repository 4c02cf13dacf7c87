//! Structured input events delivered to the lasso controller.
//!
//! The host (or the [`plot_link`](crate::plot_link) adapter) translates raw
//! UI input into this small union: pointer gestures carry a screen position
//! and the modifier state, key events carry the released key.  Each event is
//! handled synchronously, one at a time, to completion.

use eframe::egui;

use crate::geometry::ScreenPos;

/// Keyboard modifier state captured alongside an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub command: bool,
}

impl From<egui::Modifiers> for KeyModifiers {
    fn from(m: egui::Modifiers) -> Self {
        Self {
            ctrl: m.ctrl,
            alt: m.alt,
            shift: m.shift,
            command: m.command,
        }
    }
}

/// Gesture categories the host's event dispatcher routes to tools.
///
/// A tool declares the family it listens to (`Tap` for the lasso: single
/// taps add vertices, the double tap of the same family finalizes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    DoubleTap,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Tap => "tap",
            Gesture::DoubleTap => "doubletap",
        }
    }
}

/// A pointer gesture at a screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub pos: ScreenPos,
    pub modifiers: KeyModifiers,
}

impl TapEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: ScreenPos { x, y },
            modifiers: KeyModifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A key-release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: egui::Key,
    pub modifiers: KeyModifiers,
}

/// The event union dispatched to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolEvent {
    /// A single primary tap: adds a vertex when inside the plot frame.
    Tap(TapEvent),
    /// A double primary tap: finalizes the polygon into a selection.
    DoubleTap(TapEvent),
    /// A key was released while the tool was active.
    KeyUp(KeyEvent),
    /// The tool's activation toggle changed.
    ActiveChanged(bool),
}
