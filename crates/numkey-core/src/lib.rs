//! # Numkey core
//!
//! Platform-neutral building blocks shared by the keypad widget:
//!
//! - geometry (`Vec2`, `Size`, `Rect`) in logical points,
//! - `Color` and the `Scene` a paint pass writes into,
//! - pointer events and `GesturePhase` for continuous gestures,
//! - a `Clock` so timers can be driven deterministically in tests,
//! - environment locals (`Density`, `InterfaceIdiom`, `ScreenSize`),
//! - `Locale` for the decimal separator.
//!
//! Nothing here talks to a window system. Hosts translate their own events
//! into these types and render the resulting `Scene` however they like.

pub mod clock;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locale;
pub mod locals;
pub mod scene;
pub mod tests;

pub use clock::*;
pub use color::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use input::*;
pub use locale::*;
pub use locals::*;
pub use scene::*;
