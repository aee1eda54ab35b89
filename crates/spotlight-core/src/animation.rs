use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());

                if zeta < 1.0 {
                    // Underdamped
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    t * (2.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    /// Enter/exit timing used by prompt transitions.
    pub fn transition() -> Self {
        Self::tween(Duration::from_millis(225), Easing::EaseInOut)
    }

    /// One loop of the idle pulse shown while a prompt waits for input.
    pub fn idle_loop() -> Self {
        Self::tween(Duration::from_millis(1000), Easing::EaseInOut)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// Animation clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically. Clones share the same time.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
    clock: Rc<dyn Clock>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec, clock: Rc<dyn Clock>) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
            clock,
        }
    }

    pub fn set_target(&mut self, target: T) {
        if self.start_time.is_none() {
            self.start = self.current.clone();
        }
        self.target = target;
        self.start_time = Some(self.clock.now());
    }

    /// Jump to `from` and animate towards `to`, discarding any in-flight motion.
    pub fn restart(&mut self, from: T, to: T) {
        self.current = from.clone();
        self.start = from;
        self.target = to;
        self.start_time = Some(self.clock.now());
    }

    /// Stop animating and hold the current value.
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn update(&mut self) -> bool {
        if let Some(start) = self.start_time {
            let elapsed = self.clock.now().saturating_duration_since(start);

            if elapsed < self.spec.delay {
                return true; // Still waiting for delay
            }

            let animation_time = elapsed - self.spec.delay;

            if animation_time >= self.spec.duration {
                self.current = self.target.clone();
                self.start_time = None;
                return false;
            }

            let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
            let eased_t = self.spec.easing.interpolate(t);
            self.current = self.start.interpolate(&self.target, eased_t);

            true
        } else {
            false
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }
}

/// Result of polling an [`AnimationHandle`] once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationPoll {
    /// Not started, cancelled, or already reported completion.
    Idle,
    /// Eased progress in `[0, 1]`.
    Running(f32),
    /// Natural end of the run started by the last `start()`. Reported once.
    Completed,
}

/// A cancelable, listenable asynchronous animation.
///
/// Completion is delivered at most once per `start()`. Cancelling before the
/// completion has been observed suppresses it entirely, so a caller sees either
/// the completion or nothing, never both.
pub trait AnimationHandle {
    fn start(&mut self);
    /// Idempotent, and a no-op after completion.
    fn cancel(&mut self);
    fn poll(&mut self) -> AnimationPoll;
    fn is_active(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenPhase {
    Idle,
    Running,
}

/// Clock-driven 0→1 tween.
pub struct TweenHandle {
    value: AnimatedValue<f32>,
    phase: TweenPhase,
}

impl TweenHandle {
    pub fn new(spec: AnimationSpec, clock: Rc<dyn Clock>) -> Self {
        Self {
            value: AnimatedValue::new(0.0, spec, clock),
            phase: TweenPhase::Idle,
        }
    }

    pub fn progress(&self) -> f32 {
        *self.value.get()
    }
}

impl AnimationHandle for TweenHandle {
    fn start(&mut self) {
        self.value.restart(0.0, 1.0);
        self.phase = TweenPhase::Running;
    }

    fn cancel(&mut self) {
        if self.phase == TweenPhase::Running {
            self.value.stop();
            self.phase = TweenPhase::Idle;
        }
    }

    fn poll(&mut self) -> AnimationPoll {
        match self.phase {
            TweenPhase::Idle => AnimationPoll::Idle,
            TweenPhase::Running => {
                if self.value.update() {
                    AnimationPoll::Running(*self.value.get())
                } else {
                    self.phase = TweenPhase::Idle;
                    AnimationPoll::Completed
                }
            }
        }
    }

    fn is_active(&self) -> bool {
        self.phase == TweenPhase::Running
    }
}
