//! Progress values handed to the rendering collaborator.
//!
//! The prompt never draws. Each polled animation frame is turned into a
//! [`VisualFrame`] and passed to [`PromptVisuals::update`]; the host scales its
//! focal circle, background and text by `revealed_amount` and fades them by
//! `alpha`.

/// The animated effect owned by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Reveal,
    Dismiss,
    Finish,
    /// Looping pulse while revealed.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualFrame {
    pub kind: AnimationKind,
    /// Scale of the prompt relative to fully revealed.
    pub revealed_amount: f32,
    pub alpha: f32,
    /// Focal ripple strength, only non-zero for idle loops.
    pub pulse: f32,
}

impl VisualFrame {
    /// Frame for `kind` at eased progress `p` in `[0, 1]`.
    pub fn at(kind: AnimationKind, p: f32) -> Self {
        let p = p.clamp(0.0, 1.0);
        let (revealed_amount, alpha, pulse) = match kind {
            AnimationKind::Reveal => (p, p, 0.0),
            AnimationKind::Dismiss => (1.0 - p, 1.0 - p, 0.0),
            // Grow while fading out.
            AnimationKind::Finish => (1.0 + p / 4.0, 1.0 - p, 0.0),
            AnimationKind::Idle => {
                let pulse = if p < 0.5 { p * 2.0 } else { (1.0 - p) * 2.0 };
                (1.0, 1.0, pulse)
            }
        };
        Self {
            kind,
            revealed_amount,
            alpha,
            pulse,
        }
    }
}

/// Rendering collaborator. Fire-and-forget.
pub trait PromptVisuals {
    fn update(&mut self, frame: VisualFrame);
}

impl<F: FnMut(VisualFrame)> PromptVisuals for F {
    fn update(&mut self, frame: VisualFrame) {
        self(frame)
    }
}
