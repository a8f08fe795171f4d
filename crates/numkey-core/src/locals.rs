//! # Environment locals
//!
//! Numkey reads a few host-provided parameters from thread-local frames
//! instead of threading them through every call:
//!
//! - `Density`: display scale (points to physical pixels).
//! - `InterfaceIdiom`: phone or pad class layout.
//! - `ScreenSize`: full screen size, used when no width is proposed.
//!
//! Override them for a block with `with_density`, `with_idiom` and
//! `with_screen_size`:
//!
//! ```rust
//! use numkey_core::*;
//!
//! with_idiom(InterfaceIdiom::Pad, || {
//!     assert_eq!(idiom(), InterfaceIdiom::Pad);
//! });
//! assert_eq!(idiom(), InterfaceIdiom::Phone);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Size;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // points→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Density {
    /// Thickness of one physical pixel, in points.
    pub fn hairline(self) -> f32 {
        if self.scale > 0.0 {
            1.0 / self.scale
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterfaceIdiom {
    #[default]
    Phone,
    Pad,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize(pub Size);
impl Default for ScreenSize {
    fn default() -> Self {
        Self(Size::new(320.0, 480.0))
    }
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

fn local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

fn with_local<T: 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_local(density, f)
}

pub fn with_idiom<R>(idiom: InterfaceIdiom, f: impl FnOnce() -> R) -> R {
    with_local(idiom, f)
}

pub fn with_screen_size<R>(size: ScreenSize, f: impl FnOnce() -> R) -> R {
    with_local(size, f)
}

// Getters with defaults if not set

pub fn density() -> Density {
    local::<Density>()
}

pub fn idiom() -> InterfaceIdiom {
    local::<InterfaceIdiom>()
}

pub fn screen_size() -> ScreenSize {
    local::<ScreenSize>()
}
