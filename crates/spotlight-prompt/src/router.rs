//! Touch and key routing.
//!
//! A pointer event is classified against the geometry oracle:
//!
//! - inside the bounds and the focal region → focal press, consumed only when
//!   `capture_touch_event_on_focal` is set so the target underneath still
//!   receives it by default;
//! - inside the bounds but outside the focal region → non-focal press, always
//!   consumed;
//! - outside the bounds → no press, consumed only when
//!   `capture_touch_event_outside_prompt` or `capture_touch_event_on_focal`
//!   is set.
//!
//! Only down events deliver presses. The rest of the gesture gets the same
//! consumption answer so a stream is never split between prompt and target.
//!
//! A prompt that is not on screen (`NotShown`, `Dismissed`, `Finished`) takes
//! no part: every event passes through unclassified.

use spotlight_core::{KeyEvent, KeyState, PointerEvent, ShowForTimer, Vec2};

use crate::host::{AnimationFactory, PromptGeometry};
use crate::machine::PromptStateMachine;
use crate::options::PromptOptions;
use crate::state::PromptState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchRegion {
    Focal,
    Background,
    Outside,
    /// The prompt is not on screen; the event was not classified.
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchOutcome {
    pub region: TouchRegion,
    /// Stop the event from reaching whatever is under the prompt.
    pub consumed: bool,
}

/// Receiver of classified presses.
pub trait PressTarget {
    fn state(&self) -> PromptState;
    fn on_focal_press(&mut self);
    fn on_non_focal_press(&mut self);
    fn on_back_press(&mut self);
}

impl<F: AnimationFactory, T: ShowForTimer> PressTarget for PromptStateMachine<F, T> {
    fn state(&self) -> PromptState {
        PromptStateMachine::state(self)
    }

    fn on_focal_press(&mut self) {
        PromptStateMachine::on_focal_press(self);
    }

    fn on_non_focal_press(&mut self) {
        PromptStateMachine::on_non_focal_press(self);
    }

    fn on_back_press(&mut self) {
        PromptStateMachine::on_back_press(self);
    }
}

#[derive(Clone, Debug, Default)]
pub struct TouchRouter {
    capture_focal: bool,
    capture_outside: bool,
    back_enabled: bool,
    back_tracking: bool,
}

impl TouchRouter {
    pub fn new(options: &PromptOptions) -> Self {
        Self {
            capture_focal: options.capture_touch_event_on_focal,
            capture_outside: options.capture_touch_event_outside_prompt,
            back_enabled: options.back_button_dismiss_enabled,
            back_tracking: false,
        }
    }

    pub fn classify(&self, geometry: &dyn PromptGeometry, point: Vec2) -> TouchRegion {
        if !geometry.bounds_contains(point) {
            TouchRegion::Outside
        } else if geometry.focal_contains(point) {
            TouchRegion::Focal
        } else {
            TouchRegion::Background
        }
    }

    pub fn on_pointer(
        &mut self,
        target: &mut dyn PressTarget,
        geometry: &dyn PromptGeometry,
        event: &PointerEvent,
    ) -> TouchOutcome {
        if !target.state().is_visible() {
            return TouchOutcome {
                region: TouchRegion::Hidden,
                consumed: false,
            };
        }

        let region = self.classify(geometry, event.position);
        let consumed = match region {
            TouchRegion::Focal => self.capture_focal,
            TouchRegion::Background => true,
            TouchRegion::Outside => self.capture_outside || self.capture_focal,
            TouchRegion::Hidden => false,
        };

        if event.is_down() {
            log::trace!("pointer down at {:?} in {:?}", event.position, region);
            match region {
                TouchRegion::Focal => target.on_focal_press(),
                TouchRegion::Background => target.on_non_focal_press(),
                TouchRegion::Outside | TouchRegion::Hidden => {}
            }
        }

        TouchOutcome { region, consumed }
    }

    /// Back/cancel key handling. Returns whether the key was consumed.
    ///
    /// The press is tracked on key down and delivered on key up, matching
    /// platform key dispatch. It is only consumed in states where it acts.
    pub fn on_key(&mut self, target: &mut dyn PressTarget, event: &KeyEvent) -> bool {
        if !self.back_enabled || !event.key.is_back() {
            return false;
        }
        match event.state {
            KeyState::Pressed => {
                if !target.state().is_interactive() {
                    return false;
                }
                if !event.is_repeat {
                    self.back_tracking = true;
                }
                true
            }
            KeyState::Released => {
                if !std::mem::take(&mut self.back_tracking) {
                    return false;
                }
                if target.state().is_interactive() {
                    target.on_back_press();
                }
                true
            }
        }
    }
}
