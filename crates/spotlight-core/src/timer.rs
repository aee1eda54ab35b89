use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::animation::Clock;

/// One-shot delayed trigger used for "show for N milliseconds".
///
/// The trigger is delivered by [`ShowForTimer::poll`] returning `true`,
/// exactly once per `arm()` unless cancelled first.
pub trait ShowForTimer {
    /// Arms the timer, replacing any previous deadline.
    fn arm(&mut self, duration: Duration);
    /// Idempotent; a no-op once the timer has fired.
    fn cancel(&mut self);
    fn poll(&mut self) -> bool;
    fn is_armed(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deadline {
    At(Instant),
    /// Armed with a duration past the end of the clock's range.
    Never,
}

/// [`ShowForTimer`] backed by a [`Clock`] deadline.
pub struct DeadlineTimer {
    clock: Rc<dyn Clock>,
    deadline: Option<Deadline>,
}

impl DeadlineTimer {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            deadline: None,
        }
    }

    /// Time left before the trigger, if armed. `Duration::MAX` when the
    /// deadline lies beyond what the clock can represent.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| match d {
            Deadline::At(at) => at.saturating_duration_since(self.clock.now()),
            Deadline::Never => Duration::MAX,
        })
    }
}

impl ShowForTimer for DeadlineTimer {
    fn arm(&mut self, duration: Duration) {
        log::trace!("show-for timer armed for {:?}", duration);
        self.deadline = Some(match self.clock.now().checked_add(duration) {
            Some(at) => Deadline::At(at),
            None => Deadline::Never,
        });
    }

    fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::trace!("show-for timer cancelled");
        }
    }

    fn poll(&mut self) -> bool {
        match self.deadline {
            Some(Deadline::At(at)) if self.clock.now() >= at => {
                self.deadline = None;
                log::trace!("show-for timer fired");
                true
            }
            _ => false,
        }
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
