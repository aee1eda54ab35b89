use std::rc::Rc;

use spotlight_core::{
    Clock, DeadlineTimer, InputEvent, KeyEvent, PointerEvent, ShowForTimer, SystemClock,
};
use web_time::Duration;

use crate::error::PromptError;
use crate::host::{AnimationFactory, PromptGeometry, PromptStateListener, TweenFactory};
use crate::machine::PromptStateMachine;
use crate::options::PromptOptions;
use crate::router::{TouchOutcome, TouchRouter};
use crate::state::PromptState;
use crate::visuals::PromptVisuals;

/// A single prompt presentation.
///
/// Created through [`PromptBuilder`]; discard it once it is dismissed or
/// finished.
pub struct Prompt<F: AnimationFactory = TweenFactory, T: ShowForTimer = DeadlineTimer> {
    machine: PromptStateMachine<F, T>,
    router: TouchRouter,
    geometry: Box<dyn PromptGeometry>,
}

impl<F: AnimationFactory, T: ShowForTimer> Prompt<F, T> {
    pub fn show(&mut self) {
        self.machine.show();
    }

    pub fn show_for(&mut self, duration: Duration) {
        self.machine.show_for(duration);
    }

    pub fn dismiss(&mut self) {
        self.machine.dismiss();
    }

    pub fn finish(&mut self) {
        self.machine.finish();
    }

    pub fn cancel_show_for_timer(&mut self) {
        self.machine.cancel_show_for_timer();
    }

    pub fn state(&self) -> PromptState {
        self.machine.state()
    }

    pub fn is_starting(&self) -> bool {
        self.machine.is_starting()
    }

    pub fn is_complete(&self) -> bool {
        self.machine.is_complete()
    }

    pub fn is_dismissed(&self) -> bool {
        self.machine.is_dismissed()
    }

    pub fn is_dismissing(&self) -> bool {
        self.machine.is_dismissing()
    }

    /// Call once per frame.
    pub fn update(&mut self) {
        self.machine.update();
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> TouchOutcome {
        self.router
            .on_pointer(&mut self.machine, self.geometry.as_ref(), event)
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        self.router.on_key(&mut self.machine, event)
    }

    /// Returns whether the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Pointer(p) => self.handle_pointer(p).consumed,
            InputEvent::Key(k) => self.handle_key(k),
        }
    }

    pub fn machine(&self) -> &PromptStateMachine<F, T> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut PromptStateMachine<F, T> {
        &mut self.machine
    }
}

pub struct PromptBuilder {
    options: PromptOptions,
    geometry: Option<Box<dyn PromptGeometry>>,
    listener: Option<Box<dyn PromptStateListener>>,
    visuals: Option<Box<dyn PromptVisuals>>,
    clock: Rc<dyn Clock>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            options: PromptOptions::default(),
            geometry: None,
            listener: None,
            visuals: None,
            clock: Rc::new(SystemClock),
        }
    }

    pub fn options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    pub fn auto_finish(mut self, v: bool) -> Self {
        self.options.auto_finish = v;
        self
    }

    pub fn auto_dismiss(mut self, v: bool) -> Self {
        self.options.auto_dismiss = v;
        self
    }

    pub fn capture_touch_event_on_focal(mut self, v: bool) -> Self {
        self.options.capture_touch_event_on_focal = v;
        self
    }

    pub fn capture_touch_event_outside_prompt(mut self, v: bool) -> Self {
        self.options.capture_touch_event_outside_prompt = v;
        self
    }

    pub fn back_button_dismiss_enabled(mut self, v: bool) -> Self {
        self.options.back_button_dismiss_enabled = v;
        self
    }

    pub fn idle_animation_enabled(mut self, v: bool) -> Self {
        self.options.idle_animation_enabled = v;
        self
    }

    pub fn geometry(mut self, geometry: impl PromptGeometry + 'static) -> Self {
        self.geometry = Some(Box::new(geometry));
        self
    }

    pub fn listener(mut self, listener: impl PromptStateListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn visuals(mut self, visuals: impl PromptVisuals + 'static) -> Self {
        self.visuals = Some(Box::new(visuals));
        self
    }

    /// Clock for the default tween animations and show-for timer.
    pub fn clock(mut self, clock: impl Clock) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    /// Build with clock-driven tweens and a deadline timer.
    pub fn create(self) -> Result<Prompt, PromptError> {
        let animations = TweenFactory::new(self.clock.clone());
        let timer = DeadlineTimer::new(self.clock.clone());
        self.create_with(animations, timer)
    }

    /// Build with host-supplied animation and timer collaborators.
    pub fn create_with<F: AnimationFactory, T: ShowForTimer>(
        self,
        animations: F,
        timer: T,
    ) -> Result<Prompt<F, T>, PromptError> {
        let mut geometry = self
            .geometry
            .ok_or(PromptError::target("no target geometry supplied"))?;
        if !geometry.measure() {
            log::warn!("prompt target could not be measured; not showing");
            return Err(PromptError::target("target could not be measured"));
        }

        let router = TouchRouter::new(&self.options);
        let mut machine = PromptStateMachine::new(self.options, animations, timer);
        machine.set_listener(self.listener);
        machine.set_visuals(self.visuals);

        Ok(Prompt {
            machine,
            router,
            geometry,
        })
    }

    pub fn show(self) -> Result<Prompt, PromptError> {
        let mut prompt = self.create()?;
        prompt.show();
        Ok(prompt)
    }

    pub fn show_for(self, duration: Duration) -> Result<Prompt, PromptError> {
        let mut prompt = self.create()?;
        prompt.show_for(duration);
        Ok(prompt)
    }
}
