use std::fmt;

use bitflags::bitflags;
use numkey_core::{ImageHandle, Rect};

use crate::button::RepeatableButton;
use crate::style::ButtonStyle;

/// A decimal digit. Only `0..=9` can be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub const fn new(d: u8) -> Option<Digit> {
        if d <= 9 { Some(Digit(d)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of one of the 14 keys of the pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyId {
    Digit(Digit),
    Backspace,
    Done,
    Special,
    DecimalPoint,
}

impl KeyId {
    pub const COUNT: usize = 14;
    pub const ZERO: KeyId = KeyId::Digit(Digit(0));

    /// Every key, in arena order (digits first).
    pub const ALL: [KeyId; KeyId::COUNT] = [
        KeyId::Digit(Digit(0)),
        KeyId::Digit(Digit(1)),
        KeyId::Digit(Digit(2)),
        KeyId::Digit(Digit(3)),
        KeyId::Digit(Digit(4)),
        KeyId::Digit(Digit(5)),
        KeyId::Digit(Digit(6)),
        KeyId::Digit(Digit(7)),
        KeyId::Digit(Digit(8)),
        KeyId::Digit(Digit(9)),
        KeyId::Backspace,
        KeyId::Done,
        KeyId::Special,
        KeyId::DecimalPoint,
    ];

    pub fn digit(d: u8) -> Option<KeyId> {
        Digit::new(d).map(KeyId::Digit)
    }

    /// Stable slot in the keypad's key arena.
    pub fn index(self) -> usize {
        match self {
            KeyId::Digit(d) => d.value() as usize,
            KeyId::Backspace => 10,
            KeyId::Done => 11,
            KeyId::Special => 12,
            KeyId::DecimalPoint => 13,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIcon {
    Backspace,
    Dismiss,
    Custom(ImageHandle),
}

impl KeyIcon {
    /// Handle the host resolves to an actual image. Built-in icons use
    /// reserved ids at the top of the range.
    pub fn handle(self) -> ImageHandle {
        match self {
            KeyIcon::Backspace => ImageHandle(u64::MAX),
            KeyIcon::Dismiss => ImageHandle(u64::MAX - 1),
            KeyIcon::Custom(h) => h,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPayload {
    Label(String),
    Icon(KeyIcon),
    Empty,
}

impl KeyPayload {
    pub fn label(&self) -> Option<&str> {
        match self {
            KeyPayload::Label(s) => Some(s),
            _ => None,
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct KeyState: u8 {
        const HIGHLIGHTED = 1 << 0;
        const HIDDEN = 1 << 1;
    }
}

/// One key of the pad. Owned by the keypad for its whole lifetime.
pub struct Key {
    pub(crate) id: KeyId,
    pub(crate) payload: KeyPayload,
    pub(crate) button: RepeatableButton,
    pub(crate) rect: Rect,
    pub(crate) state: KeyState,
}

impl Key {
    pub(crate) fn new(id: KeyId, payload: KeyPayload, button: RepeatableButton) -> Self {
        Self {
            id,
            payload,
            button,
            rect: Rect::ZERO,
            state: KeyState::empty(),
        }
    }

    pub fn id(&self) -> KeyId {
        self.id
    }

    pub fn payload(&self) -> &KeyPayload {
        &self.payload
    }

    pub fn style(&self) -> ButtonStyle {
        self.button.style()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn state(&self) -> KeyState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state.contains(KeyState::HIDDEN)
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.contains(KeyState::HIGHLIGHTED)
    }

    pub(crate) fn set_highlighted(&mut self, on: bool) {
        self.state.set(KeyState::HIGHLIGHTED, on);
    }

    pub fn button(&self) -> &RepeatableButton {
        &self.button
    }
}
