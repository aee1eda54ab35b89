use spotlight_core::AnimationSpec;

use crate::visuals::AnimationKind;

/// Behaviour flags and timings, read-only to the state machine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PromptOptions {
    /// Finish automatically after a focal press.
    pub auto_finish: bool,
    /// Dismiss automatically after a non-focal press.
    pub auto_dismiss: bool,
    /// Consume focal touches so they never reach the target underneath.
    pub capture_touch_event_on_focal: bool,
    /// Consume touches that land outside the prompt bounds.
    pub capture_touch_event_outside_prompt: bool,
    /// Treat the back key as a non-focal press.
    pub back_button_dismiss_enabled: bool,
    /// Pulse the focal region while revealed.
    pub idle_animation_enabled: bool,
    pub reveal: AnimationSpec,
    pub dismiss: AnimationSpec,
    pub finish: AnimationSpec,
    pub idle: AnimationSpec,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            auto_finish: true,
            auto_dismiss: true,
            capture_touch_event_on_focal: false,
            capture_touch_event_outside_prompt: false,
            back_button_dismiss_enabled: false,
            idle_animation_enabled: true,
            reveal: AnimationSpec::transition(),
            dismiss: AnimationSpec::transition(),
            finish: AnimationSpec::transition(),
            idle: AnimationSpec::idle_loop(),
        }
    }
}

impl PromptOptions {
    pub fn spec_for(&self, kind: AnimationKind) -> AnimationSpec {
        match kind {
            AnimationKind::Reveal => self.reveal,
            AnimationKind::Dismiss => self.dismiss,
            AnimationKind::Finish => self.finish,
            AnimationKind::Idle => self.idle,
        }
    }
}
