use std::time::{Duration, Instant};

use uuid::Uuid;

use super::{GesturePhase, InputEvent, MouseButton, Selection, TOUCH_HOLD_MS};
use crate::models::geometry::{ContainerSize, Coordinate, Rect};
use crate::models::settings::SchedulerConfig;

/// Identifies one gesture; timers armed for an older token are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureToken(u64);

#[derive(Clone, Copy, Debug)]
struct Gesture {
    token: GestureToken,
    rect_id: Uuid,
    origin: Coordinate,
}

#[derive(Clone, Copy, Debug)]
enum State {
    Idle,
    /// Touch is down but has not been held long enough to count as a press.
    TouchHold { gesture: Gesture, deadline: Instant },
    Pressed { gesture: Gesture },
    Dragging { gesture: Gesture },
    Finished,
}

/// Single-pointer drag state machine: Idle → Pressed → Dragging → Finished.
///
/// Time is supplied by the caller, so the controller never sleeps. Only one
/// gesture exists at a time; a second press during a gesture is ignored.
/// A finished selection stays readable until [`GestureController::cancel`].
#[derive(Debug)]
pub struct GestureController {
    state: State,
    container: ContainerSize,
    touch_hold: Duration,
    rect: Option<Rect>,
    unread_finish: bool,
    generation: u64,
}

impl GestureController {
    pub fn new(container: ContainerSize, touch_hold: Duration) -> Self {
        Self {
            state: State::Idle,
            container,
            touch_hold,
            rect: None,
            unread_finish: false,
            generation: 0,
        }
    }

    pub fn from_config(config: &SchedulerConfig, container: ContainerSize) -> Self {
        Self::new(container, Duration::from_millis(config.touch_hold_ms))
    }

    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle | State::TouchHold { .. } => GesturePhase::Idle,
            State::Pressed { .. } => GesturePhase::Pressed,
            State::Dragging { .. } => GesturePhase::Dragging,
            State::Finished => GesturePhase::Finished,
        }
    }

    pub fn rect(&self) -> Option<&Rect> {
        self.rect.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Pressed { .. } | State::Dragging { .. })
    }

    pub fn has_finished_dragging(&self) -> bool {
        matches!(self.state, State::Finished)
    }

    pub fn selection(&self) -> Selection {
        Selection {
            rect: self.rect,
            is_dragging: self.is_dragging(),
            has_finished_dragging: self.has_finished_dragging(),
        }
    }

    /// The finished rectangle, handed out once per gesture.
    ///
    /// The rectangle stays readable through [`GestureController::rect`]
    /// until the host cancels.
    pub fn take_finished(&mut self) -> Option<Rect> {
        if !self.unread_finish {
            return None;
        }
        self.unread_finish = false;
        self.rect
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    /// New container measurement; applies to the next computed rectangle.
    pub fn resize(&mut self, container: ContainerSize) {
        self.container = container;
    }

    /// Touch hold waiting to be promoted, with the instant it expires.
    pub fn pending_hold(&self) -> Option<(GestureToken, Instant)> {
        match self.state {
            State::TouchHold { gesture, deadline } => Some((gesture.token, deadline)),
            _ => None,
        }
    }

    /// Promote a held touch to a press once its deadline has passed.
    ///
    /// Returns false for stale tokens or early calls.
    pub fn fire_touch_hold(&mut self, token: GestureToken, now: Instant) -> bool {
        match self.state {
            State::TouchHold { gesture, deadline } if gesture.token == token && now >= deadline => {
                log::debug!("Touch held; gesture {:?} pressed", token);
                self.state = State::Pressed { gesture };
                true
            }
            _ => false,
        }
    }

    /// Feed one input event. Returns the rectangle when it changed.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> Option<Rect> {
        // An expired hold fires before any event that arrives at or after it
        if let Some((token, deadline)) = self.pending_hold() {
            if now >= deadline {
                self.fire_touch_hold(token, now);
            }
        }

        match (self.state, event) {
            (State::Idle, InputEvent::MouseDown { at, button }) => {
                if button == MouseButton::Primary {
                    self.press(at);
                }
                None
            }
            (State::Idle, InputEvent::TouchStart { at }) => {
                let gesture = self.next_gesture(at);
                self.state = State::TouchHold {
                    gesture,
                    deadline: now + self.touch_hold,
                };
                None
            }
            (State::TouchHold { .. }, InputEvent::TouchMove { .. }) => {
                log::debug!("Touch moved during hold; treating gesture as a scroll");
                self.state = State::Idle;
                None
            }
            (State::TouchHold { .. }, event) if event.is_release() => {
                self.state = State::Idle;
                None
            }
            (State::Pressed { gesture } | State::Dragging { gesture }, event)
                if event.is_move() =>
            {
                self.state = State::Dragging { gesture };
                self.update_rect(gesture, event.position())
            }
            (State::Pressed { gesture } | State::Dragging { gesture }, event)
                if event.is_release() =>
            {
                if self.rect.is_none() {
                    self.rect = Some(self.compute_rect(gesture, gesture.origin));
                }
                self.state = State::Finished;
                self.unread_finish = true;
                log::debug!("Gesture {:?} finished", gesture.token);
                None
            }
            (
                State::Pressed { .. } | State::Dragging { .. },
                InputEvent::MouseDown { .. } | InputEvent::TouchStart { .. },
            ) => {
                log::warn!("Ignoring press while a drag is already in progress");
                None
            }
            _ => None,
        }
    }

    /// Drop the current gesture and any finished selection; back to Idle.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
        self.rect = None;
        self.unread_finish = false;
        // Invalidates any armed hold timer
        self.generation += 1;
    }

    fn next_gesture(&mut self, origin: Coordinate) -> Gesture {
        self.generation += 1;
        Gesture {
            token: GestureToken(self.generation),
            rect_id: Uuid::new_v4(),
            origin,
        }
    }

    fn press(&mut self, origin: Coordinate) {
        let gesture = self.next_gesture(origin);
        log::debug!("Gesture {:?} pressed at ({}, {})", gesture.token, origin.x, origin.y);
        self.rect = None;
        self.unread_finish = false;
        self.state = State::Pressed { gesture };
    }

    fn compute_rect(&self, gesture: Gesture, current: Coordinate) -> Rect {
        Rect::from_corners(
            gesture.rect_id,
            gesture.origin.clamp_to(self.container),
            current.clamp_to(self.container),
        )
    }

    fn update_rect(&mut self, gesture: Gesture, current: Coordinate) -> Option<Rect> {
        let rect = self.compute_rect(gesture, current);
        if self.rect == Some(rect) {
            return None;
        }
        self.rect = Some(rect);
        Some(rect)
    }
}
