//! # Spotlight core
//!
//! Leaf capabilities a spotlight prompt is built on. None of them know about
//! prompt states; `spotlight-prompt` composes them.
//!
//! - `geometry`: `Vec2`, `Rect`, `Circle` and their containment tests.
//! - `input`: pointer and key events as delivered by a host.
//! - `animation`: easing, `AnimationSpec`, the injectable `Clock`, and the
//!   `AnimationHandle` capability with a clock-driven `TweenHandle`.
//! - `timer`: the `ShowForTimer` capability with a clock-driven `DeadlineTimer`.
//!
//! ## Driving time
//!
//! Everything time-based reads an injected `Clock` instead of a global one, so
//! tests move time by hand:
//!
//! ```rust
//! use std::rc::Rc;
//! use spotlight_core::*;
//! use web_time::Duration;
//!
//! let clock = ManualClock::default();
//! let mut tween = TweenHandle::new(AnimationSpec::transition(), Rc::new(clock.clone()));
//! tween.start();
//! clock.advance(Duration::from_millis(500));
//! assert_eq!(tween.poll(), AnimationPoll::Completed);
//! assert_eq!(tween.poll(), AnimationPoll::Idle);
//! ```
//!
//! Handles are polled once per frame. A completion is reported exactly once per
//! `start()`, and a `cancel()` before that poll swallows it.

pub mod animation;
pub mod geometry;
pub mod input;
pub mod timer;


pub use animation::*;
pub use geometry::*;
pub use input::*;
pub use timer::*;
