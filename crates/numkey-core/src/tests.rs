#[cfg(test)]
mod tests {
    use crate::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_color_from_float_components() {
        assert_eq!(Color::from_rgb_f32(0.0, 0.479, 1.0, 1.0), Color(0, 122, 255, 255));
        assert_eq!(Color::from_rgb_f32(2.0, -1.0, 0.5, 0.1), Color(255, 0, 128, 26));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(rect.contains(Vec2 { x: 110.0, y: 60.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.center(), Vec2::new(60.0, 35.0));
    }

    #[test]
    fn test_rect_shared_edge_does_not_intersect() {
        let a = Rect::new(0.0, 0.0, 80.0, 55.0);
        let b = Rect::new(80.0, 0.0, 80.0, 55.0);
        let c = Rect::new(79.0, 54.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn test_rect_inset_and_offset() {
        let r = Rect::new(0.0, 0.0, 100.0, 55.0).offset(10.0, 7.0).inset(4.0, 4.0);
        assert_eq!(r, Rect::new(14.0, 11.0, 92.0, 47.0));

        let collapsed = Rect::new(0.0, 0.0, 4.0, 4.0).inset(4.0, 4.0);
        assert_eq!(collapsed.w, 0.0);
        assert_eq!(collapsed.h, 0.0);
    }

    #[test]
    fn test_locals_scoping() {
        assert_eq!(idiom(), InterfaceIdiom::Phone);
        with_idiom(InterfaceIdiom::Pad, || {
            assert_eq!(idiom(), InterfaceIdiom::Pad);
            with_density(Density { scale: 2.0 }, || {
                assert_eq!(idiom(), InterfaceIdiom::Pad);
                assert_eq!(density().hairline(), 0.5);
            });
            assert_eq!(density().scale, 1.0);
        });
        assert_eq!(idiom(), InterfaceIdiom::Phone);
    }

    #[test]
    fn test_locals_pop_on_panic() {
        let r = std::panic::catch_unwind(|| {
            with_screen_size::<()>(ScreenSize(Size::new(1.0, 1.0)), || panic!("boom"))
        });
        assert!(r.is_err());
        assert_eq!(screen_size(), ScreenSize::default());
    }

    #[test]
    fn test_locale_separators() {
        assert_eq!(Locale::new("en-US").decimal_separator(), ".");
        assert_eq!(Locale::new("de_DE.UTF-8").decimal_separator(), ",");
        assert_eq!(Locale::new("de_DE.UTF-8").tag(), "de-DE");
        assert_eq!(Locale::new("fr").decimal_separator(), ",");
        assert_eq!(Locale::new("es-MX").decimal_separator(), ".");
        assert_eq!(Locale::new("es-ES").decimal_separator(), ",");
        assert_eq!(Locale::new("ja-JP").decimal_separator(), ".");
        assert_eq!(
            Locale::new("en-US").with_separator("٫").decimal_separator(),
            "٫"
        );
    }

    #[test]
    fn test_gesture_phase_from_pointer() {
        assert_eq!(
            GesturePhase::from(&PointerEventKind::Down(PointerButton::Primary)),
            GesturePhase::Began
        );
        assert_eq!(GesturePhase::from(&PointerEventKind::Move), GesturePhase::Changed);
        assert!(GesturePhase::from(&PointerEventKind::Cancel).is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
    }

    #[test]
    fn test_test_clock_is_shared() {
        let t0 = Instant::now();
        let clock = TestClock::new(t0);
        let other = clock.clone();
        clock.advance(Duration::from_millis(150));
        assert_eq!(other.now(), t0 + Duration::from_millis(150));
        other.set(t0);
        assert_eq!(clock.now(), t0);
    }
}
