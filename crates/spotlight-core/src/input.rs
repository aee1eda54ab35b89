use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
    pub pressure: f32,
}

impl PointerEvent {
    /// Primary-button touch down at `position`.
    pub fn touch_down(position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event: PointerEventKind::Down(PointerButton::Primary),
            position,
            pressure: 1.0,
        }
    }

    pub fn touch_up(position: Vec2) -> Self {
        Self {
            event: PointerEventKind::Up(PointerButton::Primary),
            ..Self::touch_down(position)
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self.event, PointerEventKind::Down(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Escape,
    /// Platform back/cancel navigation (Android back, browser back).
    Back,
    Space,
    Tab,
}

impl Key {
    /// Keys that act as a back/cancel gesture.
    pub fn is_back(&self) -> bool {
        matches!(self, Key::Back | Key::Escape)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            is_repeat: false,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            is_repeat: false,
        }
    }
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}
