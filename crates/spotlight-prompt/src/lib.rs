//! # Spotlight prompts
//!
//! A prompt highlights one target, waits for the user, then goes away. This
//! crate owns the control logic only: which state the prompt is in, which
//! animation is running, whether a touch belongs to the prompt, and when the
//! show-for timeout fires. Drawing, measuring and window attachment are the
//! host's job, reached through the traits in [`host`] and [`visuals`].
//!
//! ## Lifecycle
//!
//! ```text
//! NotShown ─show─▶ Revealing ─anim─▶ Revealed ─focal─▶ FocalPressed ─▶ Finishing ─anim─▶ Finished
//!                                       │  └──non-focal─▶ NonFocalPressed ─▶ Dismissing ─anim─▶ Dismissed
//!                                       └─timeout─▶ ShowForTimeout ─────────▶ Dismissing
//! ```
//!
//! Illegal requests are absorbed silently. The listener sees each entered
//! state exactly once, in order, and `state()` already reports it. It can
//! answer through [`PromptControl`], for instance dismissing as soon as the
//! prompt is revealed.
//!
//! ## Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use spotlight_core::{ManualClock, PointerEvent, Rect, Vec2};
//! use spotlight_prompt::*;
//! use web_time::Duration;
//!
//! # fn main() -> Result<(), PromptError> {
//! let clock = ManualClock::default();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let bounds = Rect { x: 0.0, y: 0.0, w: 1080.0, h: 1920.0 };
//!
//! let mut prompt = PromptBuilder::new()
//!     .geometry(StaticGeometry::at_point(Vec2::new(10.0, 10.0), 44.0, bounds))
//!     .listener({
//!         let seen = seen.clone();
//!         move |s: PromptState, _: &mut PromptControl| seen.borrow_mut().push(s)
//!     })
//!     .clock(clock.clone())
//!     .show()?;
//!
//! clock.advance(Duration::from_millis(300));
//! prompt.update();
//! prompt.handle_pointer(&PointerEvent::touch_down(Vec2::new(10.0, 10.0)));
//! clock.advance(Duration::from_millis(300));
//! prompt.update();
//!
//! assert_eq!(prompt.state(), PromptState::Finished);
//! assert_eq!(seen.borrow().len(), 5);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod host;
pub mod machine;
pub mod options;
pub mod prompt;
pub mod router;
pub mod state;
pub mod transition;
pub mod visuals;


pub use error::*;
pub use host::*;
pub use machine::*;
pub use options::*;
pub use prompt::*;
pub use router::*;
pub use state::*;
pub use transition::{Effect, PromptEvent, Transition, transition};
pub use visuals::*;
