/// Lifecycle phase of a prompt.
///
/// Exactly one is current at a time. `NotShown` is the only initial state;
/// `Dismissed` and `Finished` are terminal until the prompt is shown again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PromptState {
    NotShown,
    Revealing,
    Revealed,
    FocalPressed,
    NonFocalPressed,
    Dismissing,
    Dismissed,
    Finishing,
    Finished,
    ShowForTimeout,
}

impl PromptState {
    pub const ALL: [PromptState; 10] = [
        PromptState::NotShown,
        PromptState::Revealing,
        PromptState::Revealed,
        PromptState::FocalPressed,
        PromptState::NonFocalPressed,
        PromptState::Dismissing,
        PromptState::Dismissed,
        PromptState::Finishing,
        PromptState::Finished,
        PromptState::ShowForTimeout,
    ];

    /// Revealing or revealed.
    pub fn is_starting(self) -> bool {
        matches!(self, PromptState::Revealing | PromptState::Revealed)
    }

    /// Anything past the interactive phase.
    pub fn is_complete(self) -> bool {
        !matches!(
            self,
            PromptState::NotShown
                | PromptState::Revealing
                | PromptState::Revealed
                | PromptState::FocalPressed
                | PromptState::NonFocalPressed
        )
    }

    pub fn is_dismissed(self) -> bool {
        matches!(self, PromptState::Finished | PromptState::Dismissed)
    }

    pub fn is_dismissing(self) -> bool {
        matches!(self, PromptState::Dismissing | PromptState::Finishing)
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, PromptState::FocalPressed | PromptState::NonFocalPressed)
    }

    /// States from which `show()` starts a fresh reveal.
    pub fn can_reveal(self) -> bool {
        matches!(
            self,
            PromptState::NotShown | PromptState::Dismissed | PromptState::Finished
        ) || self.is_pressed()
    }

    /// In progress and not already terminating: `dismiss()`/`finish()` apply.
    pub fn can_terminate(self) -> bool {
        self.is_starting() || self.is_pressed() || self == PromptState::ShowForTimeout
    }

    /// Accepts focal and non-focal presses.
    pub fn accepts_press(self) -> bool {
        matches!(self, PromptState::Revealed | PromptState::ShowForTimeout)
    }

    /// On screen: past `show()` and not yet gone. Only a visible prompt takes
    /// part in input routing.
    pub fn is_visible(self) -> bool {
        self != PromptState::NotShown && !self.is_dismissed()
    }

    /// Accepts the back gesture.
    pub fn is_interactive(self) -> bool {
        self.is_starting() || self.is_pressed()
    }
}
