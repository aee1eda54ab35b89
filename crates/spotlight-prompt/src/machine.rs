use std::collections::VecDeque;

use spotlight_core::{AnimationHandle, AnimationPoll, ShowForTimer};
use web_time::Duration;

use crate::host::{AnimationFactory, PromptControl, PromptStateListener};
use crate::options::PromptOptions;
use crate::state::PromptState;
use crate::transition::{Effect, PromptEvent, transition};
use crate::visuals::{AnimationKind, PromptVisuals, VisualFrame};

/// Stamp of one animation run. Bumped on every start; completions carrying an
/// older stamp are stale and ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

struct ActiveAnimation<H> {
    generation: Generation,
    kind: AnimationKind,
    handle: H,
}

/// Lifecycle automaton of a single prompt.
///
/// Requests are turned into [`PromptEvent`]s, run through
/// [`transition`](crate::transition::transition) and the resulting effects are
/// applied here. Follow-up events (listener requests, auto finish/dismiss,
/// show-for timeout) are queued and drained before the request returns, so
/// every notification for a request has been delivered by then.
pub struct PromptStateMachine<F: AnimationFactory, T: ShowForTimer> {
    state: PromptState,
    options: PromptOptions,
    animations: F,
    active: Option<ActiveAnimation<F::Handle>>,
    generation: Generation,
    timer: T,
    timer_armed: bool,
    show_for: Option<Duration>,
    listener: Option<Box<dyn PromptStateListener>>,
    visuals: Option<Box<dyn PromptVisuals>>,
    queue: VecDeque<PromptEvent>,
}

impl<F: AnimationFactory, T: ShowForTimer> PromptStateMachine<F, T> {
    pub fn new(options: PromptOptions, animations: F, timer: T) -> Self {
        Self {
            state: PromptState::NotShown,
            options,
            animations,
            active: None,
            generation: Generation::default(),
            timer,
            timer_armed: false,
            show_for: None,
            listener: None,
            visuals: None,
            queue: VecDeque::new(),
        }
    }

    pub fn set_listener(&mut self, listener: Option<Box<dyn PromptStateListener>>) {
        self.listener = listener;
    }

    pub fn set_visuals(&mut self, visuals: Option<Box<dyn PromptVisuals>>) {
        self.visuals = visuals;
    }

    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    pub fn is_starting(&self) -> bool {
        self.state.is_starting()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn is_dismissed(&self) -> bool {
        self.state.is_dismissed()
    }

    pub fn is_dismissing(&self) -> bool {
        self.state.is_dismissing()
    }

    /// Generation of the animation currently running, if any.
    pub fn active_generation(&self) -> Option<Generation> {
        self.active.as_ref().map(|a| a.generation)
    }

    pub fn active_animation(&self) -> Option<AnimationKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    pub fn is_show_for_armed(&self) -> bool {
        self.timer_armed
    }

    pub fn show(&mut self) {
        self.dispatch(PromptEvent::Show);
    }

    /// Show, then dismiss once `duration` has passed in the revealed state.
    pub fn show_for(&mut self, duration: Duration) {
        self.dispatch(PromptEvent::ShowFor(duration));
    }

    pub fn dismiss(&mut self) {
        self.dispatch(PromptEvent::Dismiss);
    }

    pub fn finish(&mut self) {
        self.dispatch(PromptEvent::Finish);
    }

    pub fn on_focal_press(&mut self) {
        self.dispatch(PromptEvent::FocalPress);
    }

    pub fn on_non_focal_press(&mut self) {
        self.dispatch(PromptEvent::NonFocalPress);
    }

    /// Back gesture, as routed by the key handler.
    pub fn on_back_press(&mut self) {
        self.dispatch(PromptEvent::BackPress);
    }

    /// Disarm the show-for timeout without touching the state. Always safe.
    pub fn cancel_show_for_timer(&mut self) {
        self.show_for = None;
        self.disarm_timer();
    }

    /// Completion of the animation stamped `generation`.
    ///
    /// Returns `false` for stale completions, which are dropped.
    pub fn animation_completed(&mut self, generation: Generation) -> bool {
        let kind = match &self.active {
            Some(a) if a.generation == generation => a.kind,
            _ => {
                log::trace!(
                    "ignoring stale completion {:?} (active {:?})",
                    generation,
                    self.active_generation()
                );
                return false;
            }
        };
        self.active = None;
        self.render(VisualFrame::at(kind, 1.0));
        self.dispatch(PromptEvent::AnimationEnded(kind));
        true
    }

    /// The show-for timer fired. Ignored unless it is still armed.
    pub fn show_for_elapsed(&mut self) {
        if !self.timer_armed {
            log::trace!("ignoring show-for timeout, timer not armed");
            return;
        }
        self.timer_armed = false;
        self.dispatch(PromptEvent::ShowForElapsed);
    }

    /// Per-frame tick: advance the active animation, then the timer.
    pub fn update(&mut self) {
        let polled = self
            .active
            .as_mut()
            .map(|a| (a.generation, a.kind, a.handle.poll()));

        match polled {
            Some((_, kind, AnimationPoll::Running(p))) => self.render(VisualFrame::at(kind, p)),
            Some((generation, _, AnimationPoll::Completed)) => {
                self.animation_completed(generation);
            }
            Some((_, _, AnimationPoll::Idle)) | None => {}
        }

        if self.timer.poll() {
            self.show_for_elapsed();
        }
    }

    fn dispatch(&mut self, event: PromptEvent) {
        self.queue.push_back(event);
        while let Some(event) = self.queue.pop_front() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PromptEvent) {
        let t = transition(self.state, event, &self.options);
        if t.is_noop() {
            log::trace!("{:?} absorbed in {:?}", event, self.state);
            return;
        }

        if let Some(next) = t.next
            && next != self.state
        {
            log::debug!("prompt {:?} -> {:?} on {:?}", self.state, next, event);
            self.state = next;
            if let Some(listener) = self.listener.as_mut() {
                let mut control = PromptControl::new(next);
                listener.on_state_changed(next, &mut control);
                self.queue.extend(control.into_requests());
            }
        }

        for effect in t.effects {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::StartAnimation(kind) => self.start_animation(kind),
            Effect::CancelAnimation => {
                if let Some(mut a) = self.active.take() {
                    a.handle.cancel();
                }
            }
            Effect::SetShowFor(d) => self.show_for = d,
            Effect::ArmShowFor => {
                if let Some(d) = self.show_for {
                    self.timer.arm(d);
                    self.timer_armed = true;
                }
            }
            Effect::CancelShowFor => self.disarm_timer(),
            Effect::Enqueue(event) => self.queue.push_back(event),
        }
    }

    fn start_animation(&mut self, kind: AnimationKind) {
        if let Some(mut previous) = self.active.take() {
            previous.handle.cancel();
        }
        self.generation = self.generation.next();
        let spec = self.options.spec_for(kind);
        let mut handle = self.animations.create(kind, spec, self.generation);
        handle.start();
        log::trace!("started {:?} animation {:?}", kind, self.generation);
        self.active = Some(ActiveAnimation {
            generation: self.generation,
            kind,
            handle,
        });
    }

    fn disarm_timer(&mut self) {
        self.timer.cancel();
        self.timer_armed = false;
    }

    fn render(&mut self, frame: VisualFrame) {
        if let Some(v) = self.visuals.as_mut() {
            v.update(frame);
        }
    }
}

impl<F: AnimationFactory, T: ShowForTimer> Drop for PromptStateMachine<F, T> {
    fn drop(&mut self) {
        if let Some(mut a) = self.active.take() {
            a.handle.cancel();
        }
        self.timer.cancel();
    }
}
