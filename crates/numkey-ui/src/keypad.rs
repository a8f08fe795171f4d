//! # Number keypad
//!
//! `NumberKeypad` owns the 14 keys of the pad, lays them out from the
//! current bounds and interface idiom, tracks one continuous gesture over the
//! whole pad and turns key activations into text commands on the bound
//! `KeyInput`.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use numkey_core::*;
//! use numkey_ui::*;
//!
//! let field = Rc::new(RefCell::new(NumberFieldState::new()));
//! let mut pad = NumberKeypad::new(Locale::new("en-US"));
//! pad.set_key_input(field.clone());
//! pad.set_bounds(Rect::new(0.0, 0.0, 320.0, 220.0));
//!
//! pad.tap(KeyId::digit(4).unwrap());
//! pad.tap(KeyId::digit(2).unwrap());
//! assert_eq!(field.borrow().text, "42");
//! ```
//!
//! Layout is lazy: configuration and geometry setters only mark the pad
//! dirty, the next `layout_if_needed` (or any gesture / paint entry point)
//! recomputes key rects. Query methods such as `key_rect` return the result
//! of the last pass.
//!
//! Repeat timers are driven by `tick`, which hosts call from their frame
//! loop while `is_tracking()` is true.

use std::cell::RefCell;
use std::rc::Rc;

use numkey_core::{
    Clock, GesturePhase, InterfaceIdiom, Locale, PointerEvent, Rect, Result, Size, SystemClock,
    Vec2, density, idiom, screen_size,
};
use serde::{Deserialize, Deserializer};
use web_time::{Duration, Instant};

use crate::button::{ButtonEvent, RepeatableButton};
use crate::config::KeypadConfig;
use crate::delegate::{Binding, KeyInputResolver, SharedDelegate, SharedKeyInput};
use crate::key::{Key, KeyIcon, KeyId, KeyPayload, KeyState};
use crate::layout::{self, KeypadLayout, LayoutInput};
use crate::style::ButtonStyle;

pub const BACKSPACE_REPEAT_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Clone)]
enum SpecialAction {
    Handler(Rc<dyn Fn()>),
    Dismiss,
}

pub struct NumberKeypad {
    keys: [Key; KeyId::COUNT],
    config: KeypadConfig,
    locale: Locale,

    bounds: Rect,
    idiom: InterfaceIdiom,
    scale: f32,
    layout: Option<KeypadLayout>,

    binding: Binding,
    special: Option<SpecialAction>,
    click_feedback: Option<Box<dyn Fn()>>,
    clock: Box<dyn Clock>,

    // key that received the press-down of the current gesture
    pressed: Option<KeyId>,
}

impl Default for NumberKeypad {
    fn default() -> Self {
        Self::new(Locale::current())
    }
}

impl NumberKeypad {
    pub fn new(locale: Locale) -> Self {
        let config = KeypadConfig {
            locale: Some(locale.tag().to_string()),
            ..KeypadConfig::default()
        };
        let keys = std::array::from_fn(|i| make_key(KeyId::ALL[i], &locale, &config));
        let mut pad = Self {
            keys,
            config,
            locale,
            bounds: Rect::ZERO,
            idiom: idiom(),
            scale: density().scale,
            layout: None,
            binding: Binding::default(),
            special: None,
            click_feedback: None,
            clock: Box::new(SystemClock),
            pressed: None,
        };
        pad.size_to_fit();
        pad
    }

    /// Builds a pad from a validated configuration.
    pub fn from_config(config: KeypadConfig) -> Result<Self> {
        config.validate()?;
        let locale = config
            .locale
            .as_deref()
            .map(Locale::new)
            .unwrap_or_else(Locale::current);
        let mut pad = Self::new(locale);
        pad.apply_config(config)?;
        Ok(pad)
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ---- configuration ------------------------------------------------

    pub fn config(&self) -> KeypadConfig {
        self.config.clone()
    }

    pub fn apply_config(&mut self, config: KeypadConfig) -> Result<()> {
        config.validate()?;
        if let Some(tag) = config.locale.as_deref()
            && tag != self.locale.tag()
        {
            self.set_locale(Locale::new(tag));
        }
        self.set_allows_decimal_point(config.allows_decimal_point);
        self.set_return_key_title(config.return_key_title);
        self.set_return_key_style(config.return_key_style);
        self.set_input_clicks_enabled(config.input_clicks);
        Ok(())
    }

    pub fn allows_decimal_point(&self) -> bool {
        self.config.allows_decimal_point
    }

    /// Shows or hides the decimal key. The zero key absorbs its cell while
    /// it is hidden.
    pub fn set_allows_decimal_point(&mut self, allows: bool) {
        if self.config.allows_decimal_point == allows {
            return;
        }
        log::debug!("allows_decimal_point -> {allows}");
        self.config.allows_decimal_point = allows;
        self.set_needs_layout();
    }

    pub fn return_key_title(&self) -> &str {
        &self.config.return_key_title
    }

    /// Relabels the done key without a layout pass.
    pub fn set_return_key_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.config.return_key_title == title {
            return;
        }
        log::debug!("return key title -> {title:?}");
        self.key_mut(KeyId::Done).payload = KeyPayload::Label(title.clone());
        self.config.return_key_title = title;
    }

    pub fn return_key_style(&self) -> ButtonStyle {
        self.config.return_key_style
    }

    pub fn set_return_key_style(&mut self, style: ButtonStyle) {
        self.config.return_key_style = style;
        self.key_mut(KeyId::Done).button.set_style(style);
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Changes the locale; only the decimal key's label depends on it.
    pub fn set_locale(&mut self, locale: Locale) {
        let sep = locale.decimal_separator().to_string();
        self.key_mut(KeyId::DecimalPoint).payload = KeyPayload::Label(sep);
        self.config.locale = Some(locale.tag().to_string());
        self.locale = locale;
    }

    pub fn input_clicks_enabled(&self) -> bool {
        self.config.input_clicks
    }

    pub fn set_input_clicks_enabled(&mut self, enabled: bool) {
        self.config.input_clicks = enabled;
    }

    /// Installs the host's input click player.
    pub fn set_click_feedback(&mut self, feedback: impl Fn() + 'static) {
        self.click_feedback = Some(Box::new(feedback));
    }

    // ---- special key --------------------------------------------------

    /// Shows `icon` on the special key and runs `handler` when it is tapped.
    /// Replaces any previous special key configuration.
    pub fn configure_special_key(&mut self, icon: KeyIcon, handler: impl Fn() + 'static) {
        self.key_mut(KeyId::Special).payload = KeyPayload::Icon(icon);
        self.special = Some(SpecialAction::Handler(Rc::new(handler)));
    }

    /// Target/action flavor of `configure_special_key`. The target is held
    /// weakly; once it is dropped the key does nothing.
    pub fn configure_special_key_with_target<T: 'static>(
        &mut self,
        icon: KeyIcon,
        target: &Rc<RefCell<T>>,
        action: fn(&mut T),
    ) {
        let target = Rc::downgrade(target);
        self.configure_special_key(icon, move || {
            if let Some(t) = target.upgrade() {
                action(&mut t.borrow_mut());
            }
        });
    }

    /// Turns the special key into a dismiss key that resigns the bound
    /// target's focus.
    pub fn configure_dismiss_key(&mut self) {
        self.key_mut(KeyId::Special).payload = KeyPayload::Icon(KeyIcon::Dismiss);
        self.special = Some(SpecialAction::Dismiss);
    }

    // ---- binding ------------------------------------------------------

    pub fn set_key_input(&mut self, input: SharedKeyInput) {
        self.binding.set_key_input(&input);
    }

    pub fn clear_key_input(&mut self) {
        self.binding.clear_key_input();
    }

    /// Lookup used when no target is bound or the bound one was dropped.
    pub fn set_key_input_resolver(
        &mut self,
        resolver: impl Fn() -> Option<SharedKeyInput> + 'static,
    ) {
        let resolver: KeyInputResolver = Box::new(resolver);
        self.binding.set_resolver(Some(resolver));
    }

    pub fn clear_key_input_resolver(&mut self) {
        self.binding.set_resolver(None);
    }

    pub fn set_delegate(&mut self, delegate: SharedDelegate) {
        self.binding.set_delegate(&delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.binding.clear_delegate();
    }

    // ---- geometry -----------------------------------------------------

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.set_needs_layout();
        }
    }

    pub fn interface_idiom(&self) -> InterfaceIdiom {
        self.idiom
    }

    pub fn set_interface_idiom(&mut self, idiom: InterfaceIdiom) {
        if self.idiom != idiom {
            self.idiom = idiom;
            self.set_needs_layout();
        }
    }

    /// Display scale; separators are one physical pixel thick.
    pub fn set_scale(&mut self, scale: f32) {
        if self.scale != scale {
            self.scale = scale;
            self.set_needs_layout();
        }
    }

    pub fn size_that_fits(&self, proposed: Size) -> Size {
        layout::preferred_size(proposed, self.idiom, screen_size().0)
    }

    /// Resizes the bounds to the preferred size, keeping the origin.
    pub fn size_to_fit(&mut self) {
        let size = self.size_that_fits(self.bounds.size());
        self.set_bounds(Rect::new(self.bounds.x, self.bounds.y, size.width, size.height));
    }

    pub fn set_needs_layout(&mut self) {
        self.layout = None;
    }

    pub fn needs_layout(&self) -> bool {
        self.layout.is_none()
    }

    pub fn layout_if_needed(&mut self) {
        if self.needs_layout() {
            self.layout();
        }
    }

    /// Recomputes every key rect and the decimal key's visibility.
    pub fn layout(&mut self) {
        let hairline = numkey_core::Density { scale: self.scale }.hairline();
        let computed = layout::compute(&LayoutInput {
            bounds: self.bounds,
            idiom: self.idiom,
            allows_decimal_point: self.config.allows_decimal_point,
            hairline,
        });
        for key in self.keys.iter_mut() {
            key.rect = computed.rect(key.id);
        }
        let hidden = computed.decimal_hidden;
        self.key_mut(KeyId::DecimalPoint)
            .state
            .set(KeyState::HIDDEN, hidden);
        if hidden {
            self.key_mut(KeyId::DecimalPoint).set_highlighted(false);
        }
        self.layout = Some(computed);
    }

    pub fn content_rect(&self) -> Option<Rect> {
        self.layout.as_ref().map(|l| l.content)
    }

    pub fn separators(&self) -> &[Rect] {
        self.layout
            .as_ref()
            .map(|l| l.separators.as_slice())
            .unwrap_or(&[])
    }

    // ---- keys ---------------------------------------------------------

    pub fn key(&self, id: KeyId) -> &Key {
        &self.keys[id.index()]
    }

    fn key_mut(&mut self, id: KeyId) -> &mut Key {
        &mut self.keys[id.index()]
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    pub fn key_rect(&self, id: KeyId) -> Rect {
        self.key(id).rect
    }

    pub fn is_hidden(&self, id: KeyId) -> bool {
        self.key(id).is_hidden()
    }

    pub fn is_highlighted(&self, id: KeyId) -> bool {
        self.key(id).is_highlighted()
    }

    /// Visible key under `point`, if any.
    pub fn key_at(&self, point: Vec2) -> Option<KeyId> {
        self.keys
            .iter()
            .find(|k| !k.is_hidden() && k.rect.contains(point))
            .map(|k| k.id)
    }

    /// True while a press is being tracked (the host should keep calling
    /// `tick`).
    pub fn is_tracking(&self) -> bool {
        self.pressed.is_some()
    }

    // ---- interaction --------------------------------------------------

    /// Feeds the pad-wide continuous gesture.
    ///
    /// The key under the pointer is highlighted while the gesture is live;
    /// on `Ended` the key under the pointer is activated exactly once. Every
    /// terminal phase clears highlights and tears down the press.
    pub fn handle_pan(&mut self, phase: GesturePhase, point: Vec2) {
        self.layout_if_needed();
        let now = self.clock.now();
        let hit = self.key_at(point);
        log::trace!("pan {phase:?} at {point:?} over {hit:?}");

        match phase {
            GesturePhase::Began => {
                if let Some(id) = hit {
                    self.press_key(id, now);
                }
                self.highlight(hit);
            }
            GesturePhase::Changed => {
                self.fire_repeats(now);
                if let Some(p) = self.pressed
                    && hit != Some(p)
                {
                    self.key_mut(p).button.drag_exit();
                }
                self.highlight(hit);
            }
            GesturePhase::Ended => {
                self.fire_repeats(now);
                self.highlight(None);
                let mut activated = false;
                if let Some(p) = self.pressed.take() {
                    activated = self.key_mut(p).button.release(hit == Some(p)).is_some();
                    if activated {
                        self.activate(p);
                    }
                }
                if !activated && let Some(id) = hit {
                    self.activate(id);
                }
            }
            GesturePhase::Cancelled | GesturePhase::Failed => {
                self.fire_repeats(now);
                self.highlight(None);
                if let Some(p) = self.pressed.take() {
                    self.key_mut(p).button.cancel();
                }
            }
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        self.handle_pan(GesturePhase::from(&event.event), event.position);
    }

    /// Drives the repeat timer of the pressed key.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.fire_repeats(now);
    }

    /// Activates a key programmatically, as if it had been tapped.
    pub fn tap(&mut self, id: KeyId) {
        self.layout_if_needed();
        self.activate(id);
    }

    fn press_key(&mut self, id: KeyId, now: Instant) {
        if let Some(prev) = self.pressed.take() {
            self.key_mut(prev).button.cancel();
        }
        self.play_click();
        if self.key_mut(id).button.press_down(now) {
            self.pressed = Some(id);
        }
    }

    fn highlight(&mut self, hit: Option<KeyId>) {
        for key in self.keys.iter_mut() {
            let on = hit == Some(key.id) && !key.is_hidden();
            key.set_highlighted(on);
        }
    }

    fn fire_repeats(&mut self, now: Instant) {
        let Some(p) = self.pressed else {
            return;
        };
        for event in self.key_mut(p).button.tick(now) {
            match event {
                ButtonEvent::Repeated => self.repeat(p),
                // activation is reported by release, never by the timer
                ButtonEvent::Activated => {}
            }
        }
    }

    fn play_click(&self) {
        if !self.config.input_clicks {
            return;
        }
        if let Some(feedback) = &self.click_feedback {
            feedback();
        }
    }

    fn repeat(&mut self, id: KeyId) {
        match id {
            KeyId::Backspace => {
                let Some(input) = self.binding.key_input() else {
                    return;
                };
                if !input.borrow().has_text() {
                    return;
                }
                self.play_click();
                self.delete_backward();
            }
            other => log::trace!("repeat on {other:?} ignored"),
        }
    }

    fn activate(&mut self, id: KeyId) {
        log::trace!("activate {id:?}");
        match id {
            KeyId::Digit(_) => {
                if let Some(text) = self.key(id).payload.label().map(str::to_owned) {
                    self.insert_text(&text);
                }
            }
            KeyId::DecimalPoint => {
                if self.is_hidden(id) {
                    log::debug!("decimal key is hidden; ignoring");
                    return;
                }
                let sep = self.locale.decimal_separator().to_string();
                self.insert_text(&sep);
            }
            KeyId::Backspace => self.delete_backward(),
            KeyId::Done => {
                if self.binding.should_return() {
                    self.dismiss();
                }
            }
            KeyId::Special => match self.special.clone() {
                Some(SpecialAction::Handler(handler)) => handler(),
                Some(SpecialAction::Dismiss) => self.dismiss(),
                None => log::trace!("special key not configured"),
            },
        }
    }

    fn insert_text(&mut self, text: &str) {
        let Some(input) = self.binding.key_input() else {
            log::trace!("no key input bound; dropping {text:?}");
            return;
        };
        if !self.binding.should_insert_text(text) {
            return;
        }
        input.borrow_mut().insert_text(text);
    }

    fn delete_backward(&mut self) {
        let Some(input) = self.binding.key_input() else {
            return;
        };
        if !self.binding.should_delete_backward() {
            return;
        }
        input.borrow_mut().delete_backward();
    }

    fn dismiss(&mut self) {
        if let Some(input) = self.binding.key_input() {
            input.borrow_mut().resign_first_responder();
        }
    }
}

fn make_key(id: KeyId, locale: &Locale, config: &KeypadConfig) -> Key {
    match id {
        KeyId::Digit(d) => Key::new(
            id,
            KeyPayload::Label(d.to_string()),
            RepeatableButton::new(ButtonStyle::White),
        ),
        KeyId::DecimalPoint => Key::new(
            id,
            KeyPayload::Label(locale.decimal_separator().to_string()),
            RepeatableButton::new(ButtonStyle::White),
        ),
        KeyId::Backspace => Key::new(
            id,
            KeyPayload::Icon(KeyIcon::Backspace),
            RepeatableButton::new(ButtonStyle::Gray).with_repeat(BACKSPACE_REPEAT_INTERVAL),
        ),
        KeyId::Special => Key::new(
            id,
            KeyPayload::Empty,
            RepeatableButton::new(ButtonStyle::Gray),
        ),
        KeyId::Done => Key::new(
            id,
            KeyPayload::Label(config.return_key_title.clone()),
            RepeatableButton::new(config.return_key_style),
        ),
    }
}

/// A keypad is built in code and bound to live collaborators; there is no
/// archived form to restore it from.
impl<'de> Deserialize<'de> for NumberKeypad {
    fn deserialize<D: Deserializer<'de>>(_: D) -> std::result::Result<Self, D::Error> {
        let err = numkey_core::Error::UnsupportedInit {
            path: "NumberKeypad::deserialize",
        };
        log::error!("{err}");
        Err(serde::de::Error::custom(err))
    }
}
