//! Collaborators a host injects into a prompt.

use std::rc::Rc;

use smallvec::SmallVec;
use spotlight_core::{AnimationHandle, AnimationSpec, Circle, Clock, Rect, TweenHandle, Vec2};

use crate::machine::Generation;
use crate::state::PromptState;
use crate::transition::PromptEvent;
use crate::visuals::AnimationKind;

/// Receives one call per state entered, in order, after the new state is
/// observable through `state()`.
///
/// The [`PromptControl`] lets the listener steer the prompt in response.
pub trait PromptStateListener {
    fn on_state_changed(&mut self, state: PromptState, prompt: &mut PromptControl);
}

impl<F: FnMut(PromptState, &mut PromptControl)> PromptStateListener for F {
    fn on_state_changed(&mut self, state: PromptState, prompt: &mut PromptControl) {
        self(state, prompt)
    }
}

/// The prompt as seen from inside a state notification.
///
/// Requests are queued and run once the transition being reported has
/// finished, in the order they were made and ahead of any automatic
/// follow-up. They obey the same rules as the matching [`Prompt`] calls.
///
/// [`Prompt`]: crate::prompt::Prompt
#[derive(Debug)]
pub struct PromptControl {
    state: PromptState,
    requests: SmallVec<[PromptEvent; 2]>,
}

impl PromptControl {
    pub(crate) fn new(state: PromptState) -> Self {
        Self {
            state,
            requests: SmallVec::new(),
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn dismiss(&mut self) {
        self.requests.push(PromptEvent::Dismiss);
    }

    pub fn finish(&mut self) {
        self.requests.push(PromptEvent::Finish);
    }

    pub(crate) fn into_requests(self) -> SmallVec<[PromptEvent; 2]> {
        self.requests
    }
}

/// Hit-test oracle for the highlighted target.
pub trait PromptGeometry {
    /// Resolve the target. `false` when it is detached or cannot be measured.
    fn measure(&mut self) -> bool;
    fn focal_contains(&self, point: Vec2) -> bool;
    fn bounds_contains(&self, point: Vec2) -> bool;
}

/// Fixed focal circle inside fixed prompt bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticGeometry {
    pub focal: Circle,
    pub bounds: Rect,
}

impl StaticGeometry {
    /// Focal circle of `radius` centred on `point`.
    pub fn at_point(point: Vec2, radius: f32, bounds: Rect) -> Self {
        Self {
            focal: Circle {
                center: point,
                radius,
            },
            bounds,
        }
    }

    /// Focal circle enclosing `target` with some breathing room.
    pub fn around(target: Rect, bounds: Rect) -> Self {
        Self {
            focal: Circle::around(target, 20.0),
            bounds,
        }
    }
}

impl PromptGeometry for StaticGeometry {
    fn measure(&mut self) -> bool {
        self.focal.radius.is_finite() && self.focal.radius > 0.0 && self.bounds.is_measurable()
    }

    fn focal_contains(&self, point: Vec2) -> bool {
        self.focal.contains(point)
    }

    fn bounds_contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

/// Creates the animation owned by a transition.
///
/// `generation` identifies the run; push-style hosts hand it back through
/// `PromptStateMachine::animation_completed`.
pub trait AnimationFactory {
    type Handle: AnimationHandle;

    fn create(
        &mut self,
        kind: AnimationKind,
        spec: AnimationSpec,
        generation: Generation,
    ) -> Self::Handle;
}

/// Clock-driven tweens, polled by `update()`.
pub struct TweenFactory {
    clock: Rc<dyn Clock>,
}

impl TweenFactory {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl AnimationFactory for TweenFactory {
    type Handle = TweenHandle;

    fn create(&mut self, _kind: AnimationKind, spec: AnimationSpec, _: Generation) -> TweenHandle {
        TweenHandle::new(spec, self.clock.clone())
    }
}
