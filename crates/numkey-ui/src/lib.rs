//! Numeric keypad widget.
//!
//! - [`NumberKeypad`]: the 4x4 pad: layout, gesture tracking, text routing.
//! - [`RepeatableButton`]: press/repeat state machine used by every key.
//! - [`KeyInput`] / [`KeypadDelegate`]: the collaborators the pad talks to.
//! - [`NumberFieldState`]: a ready-made `KeyInput` text buffer.

pub mod button;
pub mod config;
pub mod delegate;
pub mod field;
pub mod key;
pub mod keypad;
pub mod layout;
pub mod paint;
pub mod style;

pub use button::{ButtonEvent, ButtonEvents, PressState, RepeatableButton};
pub use config::{DEFAULT_RETURN_KEY_TITLE, KeypadConfig};
pub use delegate::{KeyInput, KeyInputResolver, KeypadDelegate, SharedDelegate, SharedKeyInput};
pub use field::NumberFieldState;
pub use key::{Digit, Key, KeyIcon, KeyId, KeyPayload, KeyState};
pub use keypad::{BACKSPACE_REPEAT_INTERVAL, NumberKeypad};
pub use layout::KeypadLayout;
pub use style::{Appearance, ButtonStyle};
