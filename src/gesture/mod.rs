// Click-and-drag gesture handling
//
// Turns raw pointer/touch input into a live selection rectangle.
// - Mouse: primary-button press starts a gesture immediately
// - Touch: a press only counts after a hold with no movement; moving first is a scroll

mod controller;
pub mod driver;

use serde::{Deserialize, Serialize};

use crate::models::geometry::{Coordinate, Rect};

pub use controller::{GestureController, GestureToken};

/// Default hold before a touch becomes a drag.
pub const TOUCH_HOLD_MS: u64 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// A raw input event in container-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    MouseDown { at: Coordinate, button: MouseButton },
    TouchStart { at: Coordinate },
    MouseMove { at: Coordinate },
    TouchMove { at: Coordinate },
    MouseUp { at: Coordinate },
    TouchEnd { at: Coordinate },
}

impl InputEvent {
    pub fn position(&self) -> Coordinate {
        match *self {
            InputEvent::MouseDown { at, .. }
            | InputEvent::TouchStart { at }
            | InputEvent::MouseMove { at }
            | InputEvent::TouchMove { at }
            | InputEvent::MouseUp { at }
            | InputEvent::TouchEnd { at } => at,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, InputEvent::MouseMove { .. } | InputEvent::TouchMove { .. })
    }

    pub fn is_release(&self) -> bool {
        matches!(self, InputEvent::MouseUp { .. } | InputEvent::TouchEnd { .. })
    }
}

/// Lifecycle of a single gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pressed,
    Dragging,
    Finished,
}

/// What the host renders: the live rectangle and the drag flags.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Selection {
    pub rect: Option<Rect>,
    pub is_dragging: bool,
    pub has_finished_dragging: bool,
}
