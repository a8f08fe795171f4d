//! Collaborators the keypad talks to.
//!
//! Both are externally owned. The keypad only keeps `Weak` handles; when a
//! handle is unset or its owner has been dropped, the corresponding behavior
//! is silently skipped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The text-editing object that receives keypad input.
pub trait KeyInput {
    /// Inserts `text` at the cursor.
    fn insert_text(&mut self, text: &str);
    /// Removes the character just before the cursor.
    fn delete_backward(&mut self);
    /// Whether there is any text that could be deleted.
    fn has_text(&self) -> bool;
    /// Gives up input focus; the host usually hides the keypad in response.
    fn resign_first_responder(&mut self);
}

/// Optional hooks that can veto the keypad's default behavior.
/// Every hook defaults to allowing the action.
pub trait KeypadDelegate {
    /// Asks whether `text` should be inserted.
    fn should_insert_text(&mut self, _text: &str) -> bool {
        true
    }
    /// Asks whether the character before the cursor should be removed.
    fn should_delete_backward(&mut self) -> bool {
        true
    }
    /// Asks whether the done key should perform its default behavior
    /// (resigning the bound target's focus).
    fn should_return(&mut self) -> bool {
        true
    }
}

pub type SharedKeyInput = Rc<RefCell<dyn KeyInput>>;
pub type SharedDelegate = Rc<RefCell<dyn KeypadDelegate>>;

/// Host supplied lookup for the current text input, used when no target is
/// bound or the bound one is gone.
pub type KeyInputResolver = Box<dyn Fn() -> Option<SharedKeyInput>>;

#[derive(Default)]
pub(crate) struct Binding {
    key_input: Option<Weak<RefCell<dyn KeyInput>>>,
    resolver: Option<KeyInputResolver>,
    delegate: Option<Weak<RefCell<dyn KeypadDelegate>>>,
}

impl Binding {
    pub(crate) fn set_key_input(&mut self, input: &SharedKeyInput) {
        self.key_input = Some(Rc::downgrade(input));
    }

    pub(crate) fn clear_key_input(&mut self) {
        self.key_input = None;
    }

    pub(crate) fn set_resolver(&mut self, resolver: Option<KeyInputResolver>) {
        self.resolver = resolver;
    }

    pub(crate) fn set_delegate(&mut self, delegate: &SharedDelegate) {
        self.delegate = Some(Rc::downgrade(delegate));
    }

    pub(crate) fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Current target, re-resolving lazily when unset or dropped.
    pub(crate) fn key_input(&mut self) -> Option<SharedKeyInput> {
        if let Some(rc) = self.key_input.as_ref().and_then(Weak::upgrade) {
            return Some(rc);
        }
        let resolved = self.resolver.as_ref().and_then(|r| r())?;
        log::debug!("key input re-resolved through host resolver");
        self.key_input = Some(Rc::downgrade(&resolved));
        Some(resolved)
    }

    pub(crate) fn delegate(&self) -> Option<SharedDelegate> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn should_insert_text(&self, text: &str) -> bool {
        self.delegate()
            .is_none_or(|d| d.borrow_mut().should_insert_text(text))
    }

    pub(crate) fn should_delete_backward(&self) -> bool {
        self.delegate()
            .is_none_or(|d| d.borrow_mut().should_delete_backward())
    }

    pub(crate) fn should_return(&self) -> bool {
        self.delegate().is_none_or(|d| d.borrow_mut().should_return())
    }
}
