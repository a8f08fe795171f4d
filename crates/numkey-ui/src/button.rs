//! # Repeatable button
//!
//! A pressable control with two event channels:
//!
//! - `Activated`: a single tap, reported by `release(true)`.
//! - `Repeated`: fired every `interval` while the press is held, after an
//!   initial delay. Reported by `tick(now)`.
//!
//! ```text
//!   Idle --press_down--> Pressed --delay elapsed--> Repeating
//!    ^                      |                          |
//!    +---- release / cancel / drag_exit (teardown) ----+
//! ```
//!
//! The repeat timer is a deadline, not a callback: the host drives it by
//! calling `tick` from its frame loop. Teardown drops the deadline, so no
//! `Repeated` event can be produced once the press is over, whatever the
//! tick cadence was.

use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::style::ButtonStyle;

/// Initial delay before repeating, as a multiple of the repeat interval.
pub const DEFAULT_DELAY_FACTOR: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressState {
    Idle,
    Pressed,
    Repeating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Activated,
    Repeated,
}

/// Events produced by one `tick`; a few repeats fit inline.
pub type ButtonEvents = SmallVec<[ButtonEvent; 4]>;

#[derive(Clone, Copy, Debug)]
struct RepeatSession {
    interval: Duration,
    next_fire: Instant,
}

#[derive(Debug)]
pub struct RepeatableButton {
    style: ButtonStyle,
    repeat_interval: Option<Duration>,
    initial_delay: Option<Duration>,
    state: PressState,
    session: Option<RepeatSession>,
}

impl RepeatableButton {
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            repeat_interval: None,
            initial_delay: None,
            state: PressState::Idle,
            session: None,
        }
    }

    /// Enables the repeated channel. A zero interval disables it.
    pub fn with_repeat(mut self, interval: Duration) -> Self {
        self.repeat_interval = (!interval.is_zero()).then_some(interval);
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    pub fn repeat_interval(&self) -> Option<Duration> {
        self.repeat_interval
    }

    pub fn initial_delay(&self) -> Option<Duration> {
        self.repeat_interval
            .map(|i| self.initial_delay.unwrap_or(i * DEFAULT_DELAY_FACTOR))
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state != PressState::Idle
    }

    pub fn has_active_timer(&self) -> bool {
        self.session.is_some()
    }

    /// Begins a press. Returns false if a press is already in progress.
    pub fn press_down(&mut self, now: Instant) -> bool {
        if self.state != PressState::Idle {
            log::trace!("press_down ignored: already {:?}", self.state);
            return false;
        }
        self.state = PressState::Pressed;
        if let (Some(interval), Some(delay)) = (self.repeat_interval, self.initial_delay()) {
            self.session = Some(RepeatSession {
                interval,
                next_fire: now + delay,
            });
        }
        true
    }

    /// Advances the repeat timer to `now` and returns one `Repeated` event
    /// per elapsed interval. Every elapsed deadline counts, so a late tick
    /// catches up.
    pub fn tick(&mut self, now: Instant) -> ButtonEvents {
        let mut fired = ButtonEvents::new();
        let Some(session) = self.session.as_mut() else {
            return fired;
        };
        while session.next_fire <= now {
            match self.state {
                PressState::Pressed => self.state = PressState::Repeating,
                PressState::Repeating => fired.push(ButtonEvent::Repeated),
                PressState::Idle => break,
            }
            session.next_fire += session.interval;
        }
        fired
    }

    /// Ends the press. `inside` tells whether the pointer was still over the
    /// button, in which case the press counts as an activation.
    pub fn release(&mut self, inside: bool) -> Option<ButtonEvent> {
        if self.state == PressState::Idle {
            return None;
        }
        self.teardown();
        inside.then_some(ButtonEvent::Activated)
    }

    /// Pointer left the button mid-press: stop repeating, keep tracking.
    pub fn drag_exit(&mut self) {
        self.session = None;
        if self.state == PressState::Repeating {
            self.state = PressState::Pressed;
        }
    }

    /// Ends the press without activation. Safe to call at any time.
    pub fn cancel(&mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.session.take().is_some() {
            log::trace!("repeat session cancelled");
        }
        self.state = PressState::Idle;
    }
}

impl Drop for RepeatableButton {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_plain_button_activates_once() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::White);
        assert!(b.press_down(t0));
        assert!(!b.has_active_timer());
        assert_eq!(b.tick(t0 + ms(10_000)).len(), 0);
        assert_eq!(b.release(true), Some(ButtonEvent::Activated));
        assert_eq!(b.release(true), None);
        assert_eq!(b.state(), PressState::Idle);
    }

    #[test]
    fn test_release_outside_does_not_activate() {
        let mut b = RepeatableButton::new(ButtonStyle::White);
        b.press_down(Instant::now());
        assert_eq!(b.release(false), None);
        assert!(!b.is_pressed());
    }

    #[test]
    fn test_default_delay_is_twice_interval() {
        let b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(150));
        assert_eq!(b.initial_delay(), Some(ms(300)));
        let plain = RepeatableButton::new(ButtonStyle::Gray);
        assert_eq!(plain.initial_delay(), None);
        let zero = RepeatableButton::new(ButtonStyle::Gray).with_repeat(Duration::ZERO);
        assert_eq!(zero.repeat_interval(), None);
    }

    #[test]
    fn test_repeat_count_matches_hold_duration() {
        let t0 = Instant::now();
        for hold in [0u64, 100, 299, 300, 449, 450, 451, 1000, 1234] {
            let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(150));
            b.press_down(t0);
            // tick in uneven steps; catch-up must make the total exact
            let mut fired = 0;
            let mut t = 0;
            while t < hold {
                t = (t + 37).min(hold);
                fired += b.tick(t0 + ms(t)).len();
            }
            let expected = hold.saturating_sub(300) / 150;
            assert_eq!(fired as u64, expected, "hold {hold}ms");
            b.release(true);
        }
    }

    #[test]
    fn test_tick_reports_repeated_events() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(100));
        b.press_down(t0);
        let events = b.tick(t0 + ms(500));
        assert_eq!(
            events.as_slice(),
            &[ButtonEvent::Repeated, ButtonEvent::Repeated, ButtonEvent::Repeated]
        );
        assert!(b.tick(t0 + ms(500)).is_empty());
        assert_eq!(b.release(true), Some(ButtonEvent::Activated));
    }

    #[test]
    fn test_enters_repeating_after_delay() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(100));
        b.press_down(t0);
        assert_eq!(b.tick(t0 + ms(199)).len(), 0);
        assert_eq!(b.state(), PressState::Pressed);
        assert_eq!(b.tick(t0 + ms(200)).len(), 0);
        assert_eq!(b.state(), PressState::Repeating);
        assert_eq!(b.tick(t0 + ms(300)).len(), 1);
    }

    #[test]
    fn test_no_repeat_after_release_mid_interval() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(150));
        b.press_down(t0);
        assert_eq!(b.tick(t0 + ms(500)).len(), 1);
        b.release(true);
        assert!(!b.has_active_timer());
        assert_eq!(b.tick(t0 + ms(5_000)).len(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(150));
        b.cancel();
        b.press_down(t0);
        b.cancel();
        b.cancel();
        assert_eq!(b.state(), PressState::Idle);
        assert_eq!(b.tick(t0 + ms(1_000)).len(), 0);
    }

    #[test]
    fn test_second_press_does_not_rearm() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(100));
        assert!(b.press_down(t0));
        assert!(!b.press_down(t0 + ms(150)));
        // still on the first session's schedule: 200 delay, then 300, 400
        assert_eq!(b.tick(t0 + ms(400)).len(), 2);
    }

    #[test]
    fn test_drag_exit_stops_repeating_but_keeps_press() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray).with_repeat(ms(100));
        b.press_down(t0);
        assert_eq!(b.tick(t0 + ms(350)).len(), 1);
        b.drag_exit();
        assert_eq!(b.state(), PressState::Pressed);
        assert_eq!(b.tick(t0 + ms(2_000)).len(), 0);
        assert_eq!(b.release(false), None);
    }

    #[test]
    fn test_custom_initial_delay() {
        let t0 = Instant::now();
        let mut b = RepeatableButton::new(ButtonStyle::Gray)
            .with_repeat(ms(100))
            .with_initial_delay(ms(50));
        b.press_down(t0);
        assert_eq!(b.tick(t0 + ms(250)).len(), 2);
    }
}
