//! Pure transition table.
//!
//! `transition(state, event, options)` decides the next state and the side
//! effects to run, without touching animations, timers or listeners. The
//! machine in [`crate::machine`] is a thin interpreter of its output.
//!
//! | from | event | to |
//! |---|---|---|
//! | `NotShown`, `Dismissed`, `Finished`, pressed | `Show` / `ShowFor` | `Revealing` |
//! | `Revealing` | `AnimationEnded(Reveal)` | `Revealed` |
//! | `Revealed`, `ShowForTimeout` | `FocalPress` | `FocalPressed` (+ `Finish` if auto-finish) |
//! | `Revealed`, `ShowForTimeout` | `NonFocalPress` | `NonFocalPressed` (+ `Dismiss` if auto-dismiss) |
//! | `Revealing`, `Revealed`, `ShowForTimeout` | `BackPress` | `NonFocalPressed` (+ `Dismiss` if auto-dismiss) |
//! | pressed | `BackPress` | `Dismissing` |
//! | `Revealed` | `ShowForElapsed` | `ShowForTimeout` (+ `Dismiss`) |
//! | starting, pressed, `ShowForTimeout` | `Dismiss` | `Dismissing` |
//! | starting, pressed, `ShowForTimeout` | `Finish` | `Finishing` |
//! | `Dismissing` | `AnimationEnded(Dismiss)` | `Dismissed` |
//! | `Finishing` | `AnimationEnded(Finish)` | `Finished` |
//!
//! Every other pair is absorbed.

use smallvec::{SmallVec, smallvec};
use web_time::Duration;

use crate::options::PromptOptions;
use crate::state::PromptState;
use crate::visuals::AnimationKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    Show,
    ShowFor(Duration),
    Dismiss,
    Finish,
    FocalPress,
    NonFocalPress,
    /// Back gesture. A non-focal press that also interrupts the reveal and
    /// dismisses a parked press.
    BackPress,
    /// The active animation of this kind ran to completion.
    AnimationEnded(AnimationKind),
    ShowForElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the active animation with a fresh one of this kind.
    StartAnimation(AnimationKind),
    CancelAnimation,
    /// Remember the show-for duration to arm once revealed.
    SetShowFor(Option<Duration>),
    /// Arm the remembered show-for duration, if any.
    ArmShowFor,
    CancelShowFor,
    /// Run this event after the current one has been applied.
    Enqueue(PromptEvent),
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// `None` leaves the state untouched and fires no notification.
    pub next: Option<PromptState>,
    pub effects: Effects,
}

impl Transition {
    fn ignore() -> Self {
        Self {
            next: None,
            effects: SmallVec::new(),
        }
    }

    fn to(next: PromptState, effects: Effects) -> Self {
        Self {
            next: Some(next),
            effects,
        }
    }

    fn stay(effects: Effects) -> Self {
        Self {
            next: None,
            effects,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.next.is_none() && self.effects.is_empty()
    }
}

pub fn transition(state: PromptState, event: PromptEvent, options: &PromptOptions) -> Transition {
    use PromptState as S;

    match event {
        PromptEvent::Show | PromptEvent::ShowFor(_) if state.can_reveal() => {
            let show_for = match event {
                PromptEvent::ShowFor(d) => Some(d),
                _ => None,
            };
            Transition::to(
                S::Revealing,
                smallvec![
                    Effect::CancelShowFor,
                    Effect::SetShowFor(show_for),
                    Effect::StartAnimation(AnimationKind::Reveal),
                ],
            )
        }

        PromptEvent::Dismiss if state.can_terminate() => {
            terminate(S::Dismissing, AnimationKind::Dismiss)
        }

        PromptEvent::Finish if state.can_terminate() => {
            terminate(S::Finishing, AnimationKind::Finish)
        }

        PromptEvent::FocalPress if state.accepts_press() => {
            let mut effects: Effects = smallvec![Effect::CancelShowFor, Effect::CancelAnimation];
            if options.auto_finish {
                effects.push(Effect::Enqueue(PromptEvent::Finish));
            }
            Transition::to(S::FocalPressed, effects)
        }

        PromptEvent::NonFocalPress if state.accepts_press() => non_focal_press(options),

        PromptEvent::BackPress if state.accepts_press() || state == S::Revealing => {
            non_focal_press(options)
        }

        PromptEvent::BackPress if state.is_pressed() => {
            terminate(S::Dismissing, AnimationKind::Dismiss)
        }

        PromptEvent::ShowForElapsed if state == S::Revealed => Transition::to(
            S::ShowForTimeout,
            smallvec![
                Effect::CancelAnimation,
                Effect::Enqueue(PromptEvent::Dismiss)
            ],
        ),

        PromptEvent::AnimationEnded(kind) => match (kind, state) {
            (AnimationKind::Reveal, S::Revealing) => {
                let mut effects: Effects = smallvec![Effect::ArmShowFor];
                if options.idle_animation_enabled {
                    effects.push(Effect::StartAnimation(AnimationKind::Idle));
                }
                Transition::to(S::Revealed, effects)
            }
            // Next pulse.
            (AnimationKind::Idle, S::Revealed) if options.idle_animation_enabled => {
                Transition::stay(smallvec![Effect::StartAnimation(AnimationKind::Idle)])
            }
            (AnimationKind::Dismiss, S::Dismissing) => Transition::to(S::Dismissed, SmallVec::new()),
            (AnimationKind::Finish, S::Finishing) => Transition::to(S::Finished, SmallVec::new()),
            _ => Transition::ignore(),
        },

        _ => Transition::ignore(),
    }
}

fn terminate(next: PromptState, kind: AnimationKind) -> Transition {
    Transition::to(next, smallvec![Effect::CancelShowFor, Effect::StartAnimation(kind)])
}

fn non_focal_press(options: &PromptOptions) -> Transition {
    let mut effects: Effects = smallvec![Effect::CancelShowFor, Effect::CancelAnimation];
    if options.auto_dismiss {
        effects.push(Effect::Enqueue(PromptEvent::Dismiss));
    }
    Transition::to(PromptState::NonFocalPressed, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> PromptOptions {
        PromptOptions::default()
    }

    #[test]
    fn show_is_only_legal_from_startable_states() {
        for s in PromptState::ALL {
            let t = transition(s, PromptEvent::Show, &opts());
            if s.can_reveal() {
                assert_eq!(t.next, Some(PromptState::Revealing), "{s:?}");
                assert!(t.effects.contains(&Effect::StartAnimation(AnimationKind::Reveal)));
            } else {
                assert!(t.is_noop(), "{s:?} should absorb show");
            }
        }
    }

    #[test]
    fn show_for_remembers_duration() {
        let d = Duration::from_millis(1000);
        let t = transition(PromptState::NotShown, PromptEvent::ShowFor(d), &opts());
        assert!(t.effects.contains(&Effect::SetShowFor(Some(d))));

        let t = transition(PromptState::Revealed, PromptEvent::ShowFor(d), &opts());
        assert!(t.is_noop());
    }

    #[test]
    fn dismiss_and_finish_share_legality() {
        let legal = [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::FocalPressed,
            PromptState::NonFocalPressed,
            PromptState::ShowForTimeout,
        ];
        for s in PromptState::ALL {
            let d = transition(s, PromptEvent::Dismiss, &opts());
            let f = transition(s, PromptEvent::Finish, &opts());
            if legal.contains(&s) {
                assert_eq!(d.next, Some(PromptState::Dismissing), "{s:?}");
                assert_eq!(f.next, Some(PromptState::Finishing), "{s:?}");
            } else {
                assert!(d.is_noop() && f.is_noop(), "{s:?}");
            }
        }
    }

    #[test]
    fn presses_respect_auto_flags() {
        let t = transition(PromptState::Revealed, PromptEvent::FocalPress, &opts());
        assert_eq!(t.next, Some(PromptState::FocalPressed));
        assert!(t.effects.contains(&Effect::Enqueue(PromptEvent::Finish)));

        let manual = PromptOptions {
            auto_finish: false,
            auto_dismiss: false,
            ..opts()
        };
        let t = transition(PromptState::Revealed, PromptEvent::FocalPress, &manual);
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Enqueue(_))));
        let t = transition(PromptState::ShowForTimeout, PromptEvent::NonFocalPress, &manual);
        assert_eq!(t.next, Some(PromptState::NonFocalPressed));
        assert!(!t.effects.iter().any(|e| matches!(e, Effect::Enqueue(_))));
    }

    #[test]
    fn presses_ignored_outside_revealed() {
        for s in [
            PromptState::NotShown,
            PromptState::Revealing,
            PromptState::FocalPressed,
            PromptState::Dismissing,
            PromptState::Finished,
        ] {
            assert!(transition(s, PromptEvent::FocalPress, &opts()).is_noop(), "{s:?}");
            assert!(transition(s, PromptEvent::NonFocalPress, &opts()).is_noop(), "{s:?}");
        }
    }

    #[test]
    fn back_press_acts_in_every_interactive_state() {
        let manual = PromptOptions {
            auto_dismiss: false,
            ..opts()
        };
        for s in [
            PromptState::Revealing,
            PromptState::Revealed,
            PromptState::ShowForTimeout,
        ] {
            let t = transition(s, PromptEvent::BackPress, &opts());
            assert_eq!(t.next, Some(PromptState::NonFocalPressed), "{s:?}");
            assert!(t.effects.contains(&Effect::CancelAnimation), "{s:?}");
            assert!(t.effects.contains(&Effect::Enqueue(PromptEvent::Dismiss)), "{s:?}");

            let t = transition(s, PromptEvent::BackPress, &manual);
            assert!(!t.effects.iter().any(|e| matches!(e, Effect::Enqueue(_))), "{s:?}");
        }
        for s in [PromptState::FocalPressed, PromptState::NonFocalPressed] {
            let t = transition(s, PromptEvent::BackPress, &manual);
            assert_eq!(t.next, Some(PromptState::Dismissing), "{s:?}");
        }
        for s in [
            PromptState::NotShown,
            PromptState::Dismissing,
            PromptState::Finishing,
            PromptState::Dismissed,
            PromptState::Finished,
        ] {
            assert!(transition(s, PromptEvent::BackPress, &opts()).is_noop(), "{s:?}");
        }
    }

    #[test]
    fn timeout_only_while_revealed() {
        let t = transition(PromptState::Revealed, PromptEvent::ShowForElapsed, &opts());
        assert_eq!(t.next, Some(PromptState::ShowForTimeout));
        assert!(t.effects.contains(&Effect::Enqueue(PromptEvent::Dismiss)));

        assert!(transition(PromptState::Revealing, PromptEvent::ShowForElapsed, &opts()).is_noop());
        assert!(transition(PromptState::Dismissing, PromptEvent::ShowForElapsed, &opts()).is_noop());
    }

    #[test]
    fn animation_end_must_match_state() {
        let end = |k| PromptEvent::AnimationEnded(k);
        assert_eq!(
            transition(PromptState::Revealing, end(AnimationKind::Reveal), &opts()).next,
            Some(PromptState::Revealed)
        );
        assert!(transition(PromptState::Dismissing, end(AnimationKind::Reveal), &opts()).is_noop());
        assert!(transition(PromptState::Finishing, end(AnimationKind::Dismiss), &opts()).is_noop());
        assert_eq!(
            transition(PromptState::Finishing, end(AnimationKind::Finish), &opts()).next,
            Some(PromptState::Finished)
        );
    }

    #[test]
    fn idle_loops_only_when_enabled() {
        let end = PromptEvent::AnimationEnded(AnimationKind::Idle);
        let t = transition(PromptState::Revealed, end, &opts());
        assert_eq!(t.next, None);
        assert_eq!(
            t.effects.as_slice(),
            &[Effect::StartAnimation(AnimationKind::Idle)]
        );

        let quiet = PromptOptions {
            idle_animation_enabled: false,
            ..opts()
        };
        assert!(transition(PromptState::Revealed, end, &quiet).is_noop());
        let t = transition(
            PromptState::Revealing,
            PromptEvent::AnimationEnded(AnimationKind::Reveal),
            &quiet,
        );
        assert_eq!(t.effects.as_slice(), &[Effect::ArmShowFor]);
    }
}
