//! # Key grid layout
//!
//! The pad is a fixed 4x4 grid:
//!
//! ```text
//!   +-----+-----+-----+-----+
//!   |  1  |  2  |  3  |     |
//!   +-----+-----+-----+ <x] |
//!   |  4  |  5  |  6  |     |
//!   +-----+-----+-----+-----+
//!   |  7  |  8  |  9  |     |
//!   +-----+-----+-----+ Done|
//!   | spc |  0  |  .  |     |
//!   +-----+-----+-----+-----+
//! ```
//!
//! Without a decimal point the zero key spans the last two digit columns
//! and the decimal key is hidden (it keeps its rect).
//!
//! On pad-class layouts the content is clamped to `PAD_MAX_WIDTH`, centered,
//! surrounded by `PAD_BORDER` and every key is inset by half of
//! `PAD_SPACING`. Phone layouts are edge to edge with hairline separators.
//!
//! Everything here is a pure function of `LayoutInput`.

use numkey_core::{InterfaceIdiom, Rect, Size};
use smallvec::SmallVec;

use crate::key::{Digit, KeyId};

pub const ROWS: usize = 4;
pub const COLUMNS: usize = 4;
pub const ROW_HEIGHT: f32 = 55.0;
pub const PAD_BORDER: f32 = 7.0;
pub const PAD_SPACING: f32 = 8.0;
pub const PAD_MAX_WIDTH: f32 = 400.0;

const DIGITS_PER_ROW: usize = 3;
const SEPARATOR_COUNT: usize = ROWS + COLUMNS - 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub bounds: Rect,
    pub idiom: InterfaceIdiom,
    pub allows_decimal_point: bool,
    /// Separator thickness in points (one physical pixel).
    pub hairline: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeypadLayout {
    pub content: Rect,
    pub column_width: f32,
    pub keys: [Rect; KeyId::COUNT],
    pub decimal_hidden: bool,
    pub separators: SmallVec<[Rect; SEPARATOR_COUNT]>,
}

impl KeypadLayout {
    pub fn rect(&self, id: KeyId) -> Rect {
        self.keys[id.index()]
    }
}

pub fn border(idiom: InterfaceIdiom) -> f32 {
    match idiom {
        InterfaceIdiom::Pad => PAD_BORDER,
        InterfaceIdiom::Phone => 0.0,
    }
}

/// Height needed for the grid, plus border.
pub fn preferred_height(idiom: InterfaceIdiom) -> f32 {
    ROW_HEIGHT * ROWS as f32 + border(idiom) * 2.0
}

/// Size the pad wants for a proposed size. A zero or unspecified width
/// means "full screen width".
pub fn preferred_size(proposed: Size, idiom: InterfaceIdiom, screen: Size) -> Size {
    let width = if proposed.width > 0.0 && proposed.width.is_finite() {
        proposed.width
    } else {
        screen.width
    };
    Size::new(width, preferred_height(idiom))
}

pub fn content_rect(bounds: Rect, idiom: InterfaceIdiom) -> Rect {
    let spacing = border(idiom);
    let max_width = match idiom {
        InterfaceIdiom::Pad => PAD_MAX_WIDTH,
        InterfaceIdiom::Phone => bounds.w,
    };
    let width = max_width.min(bounds.w).max(0.0);
    Rect::new(
        bounds.x + (bounds.w - width).round() / 2.0,
        bounds.y + spacing,
        width,
        (bounds.h - spacing * 2.0).max(0.0),
    )
}

fn place(rect: Rect, content: Rect, idiom: InterfaceIdiom) -> Rect {
    let r = rect.offset(content.x, content.y);
    match idiom {
        InterfaceIdiom::Pad => {
            let inset = PAD_SPACING / 2.0;
            r.inset(inset, inset)
        }
        InterfaceIdiom::Phone => r,
    }
}

pub fn compute(input: &LayoutInput) -> KeypadLayout {
    let LayoutInput {
        bounds,
        idiom,
        allows_decimal_point,
        hairline,
    } = *input;

    let content = content_rect(bounds, idiom);
    let column_width = content.w / COLUMNS as f32;
    let cell = |col: f32, row: f32, cols: f32, rows: f32| {
        Rect::new(
            col * column_width,
            row * ROW_HEIGHT,
            cols * column_width,
            rows * ROW_HEIGHT,
        )
    };

    let mut keys = [Rect::ZERO; KeyId::COUNT];

    for d in Digit::ALL.into_iter().skip(1) {
        let idx = (d.value() - 1) as usize;
        let row = (idx / DIGITS_PER_ROW) as f32;
        let col = (idx % DIGITS_PER_ROW) as f32;
        keys[KeyId::Digit(d).index()] = place(cell(col, row, 1.0, 1.0), content, idiom);
    }

    let zero_span = if allows_decimal_point { 1.0 } else { 2.0 };
    keys[KeyId::ZERO.index()] = place(cell(1.0, 3.0, zero_span, 1.0), content, idiom);
    keys[KeyId::Special.index()] = place(cell(0.0, 3.0, 1.0, 1.0), content, idiom);
    keys[KeyId::DecimalPoint.index()] = place(cell(2.0, 3.0, 1.0, 1.0), content, idiom);

    // utility column: backspace on top, done below, two rows each
    for (i, id) in [KeyId::Backspace, KeyId::Done].into_iter().enumerate() {
        keys[id.index()] = place(cell(3.0, i as f32 * 2.0, 1.0, 2.0), content, idiom);
    }

    let separators = match idiom {
        InterfaceIdiom::Phone => {
            separators(content, column_width, allows_decimal_point, hairline)
        }
        InterfaceIdiom::Pad => SmallVec::new(),
    };

    log::debug!(
        "keypad layout: content={content:?} column_width={column_width} decimal={allows_decimal_point}"
    );

    KeypadLayout {
        content,
        column_width,
        keys,
        decimal_hidden: !allows_decimal_point,
        separators,
    }
}

fn separators(
    content: Rect,
    column_width: f32,
    allows_decimal_point: bool,
    hairline: f32,
) -> SmallVec<[Rect; SEPARATOR_COUNT]> {
    let mut out = SmallVec::new();
    for row in 0..ROWS {
        // odd rows stop short so they do not cross backspace and done
        let w = if row % 2 == 1 {
            content.w - column_width
        } else {
            content.w
        };
        out.push(Rect::new(0.0, row as f32 * ROW_HEIGHT, w, hairline).offset(content.x, content.y));
    }
    for col in 0..COLUMNS - 1 {
        let h = if col == 1 && !allows_decimal_point {
            // leave the widened zero key whole
            content.h - ROW_HEIGHT
        } else {
            content.h
        };
        out.push(
            Rect::new((col + 1) as f32 * column_width, 0.0, hairline, h.max(0.0))
                .offset(content.x, content.y),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(w: f32, h: f32, decimal: bool) -> KeypadLayout {
        compute(&LayoutInput {
            bounds: Rect::new(0.0, 0.0, w, h),
            idiom: InterfaceIdiom::Phone,
            allows_decimal_point: decimal,
            hairline: 0.5,
        })
    }

    fn pad(w: f32, decimal: bool) -> KeypadLayout {
        compute(&LayoutInput {
            bounds: Rect::new(0.0, 0.0, w, preferred_height(InterfaceIdiom::Pad)),
            idiom: InterfaceIdiom::Pad,
            allows_decimal_point: decimal,
            hairline: 1.0,
        })
    }

    fn assert_no_overlaps(l: &KeypadLayout) {
        for a in KeyId::ALL {
            for b in KeyId::ALL {
                if a == b {
                    continue;
                }
                let widened_zero = l.decimal_hidden
                    && matches!(
                        (a, b),
                        (KeyId::ZERO, KeyId::DecimalPoint) | (KeyId::DecimalPoint, KeyId::ZERO)
                    );
                if widened_zero {
                    assert!(l.rect(a).intersects(&l.rect(b)));
                    continue;
                }
                assert!(
                    !l.rect(a).intersects(&l.rect(b)),
                    "{a:?} {:?} overlaps {b:?} {:?}",
                    l.rect(a),
                    l.rect(b)
                );
            }
        }
    }

    #[test]
    fn test_phone_320_without_decimal() {
        let l = phone(320.0, 216.0, false);
        assert_eq!(l.column_width, 80.0);
        assert_eq!(l.rect(KeyId::ZERO), Rect::new(80.0, 165.0, 160.0, 55.0));
        assert!(l.decimal_hidden);
        assert_eq!(l.rect(KeyId::DecimalPoint), Rect::new(160.0, 165.0, 80.0, 55.0));
    }

    #[test]
    fn test_phone_320_with_decimal() {
        let l = phone(320.0, 216.0, true);
        assert_eq!(l.rect(KeyId::ZERO), Rect::new(80.0, 165.0, 80.0, 55.0));
        assert_eq!(l.rect(KeyId::DecimalPoint), Rect::new(160.0, 165.0, 80.0, 55.0));
        assert!(!l.decimal_hidden);
    }

    #[test]
    fn test_digit_positions_row_major() {
        let l = phone(320.0, 220.0, true);
        for d in 1..=9u8 {
            let i = (d - 1) as f32;
            let r = l.rect(KeyId::digit(d).unwrap());
            assert_eq!(r.x, (i as usize % 3) as f32 * 80.0, "digit {d}");
            assert_eq!(r.y, (i as usize / 3) as f32 * 55.0, "digit {d}");
        }
        assert_eq!(l.rect(KeyId::Special), Rect::new(0.0, 165.0, 80.0, 55.0));
        assert_eq!(l.rect(KeyId::Backspace), Rect::new(240.0, 0.0, 80.0, 110.0));
        assert_eq!(l.rect(KeyId::Done), Rect::new(240.0, 110.0, 80.0, 110.0));
    }

    #[test]
    fn test_no_overlaps_across_sizes() {
        for w in [220.0, 320.0, 375.0, 414.0, 1024.0] {
            for decimal in [false, true] {
                assert_no_overlaps(&phone(w, preferred_height(InterfaceIdiom::Phone), decimal));
                assert_no_overlaps(&pad(w, decimal));
            }
        }
    }

    #[test]
    fn test_decimal_toggle_round_trip() {
        let before = phone(375.0, 220.0, false);
        let on = phone(375.0, 220.0, true);
        let after = phone(375.0, 220.0, false);
        assert_ne!(before.rect(KeyId::ZERO), on.rect(KeyId::ZERO));
        assert_eq!(before, after);
    }

    #[test]
    fn test_pad_clamps_and_centers() {
        let l = pad(768.0, true);
        assert_eq!(l.content, Rect::new(184.0, 7.0, 400.0, 220.0));
        assert!(l.separators.is_empty());
        // inset by half the spacing on every side
        assert_eq!(l.rect(KeyId::digit(1).unwrap()), Rect::new(188.0, 11.0, 92.0, 47.0));
        assert_eq!(l.rect(KeyId::Done), Rect::new(488.0, 121.0, 92.0, 102.0));
    }

    #[test]
    fn test_pad_narrower_than_max_width_uses_full_width() {
        let l = pad(320.0, false);
        assert_eq!(l.content.x, 0.0);
        assert_eq!(l.content.w, 320.0);
    }

    #[test]
    fn test_phone_separators() {
        let l = phone(320.0, 220.0, true);
        assert_eq!(l.separators.len(), 7);
        assert_eq!(l.separators[0], Rect::new(0.0, 0.0, 320.0, 0.5));
        assert_eq!(l.separators[1], Rect::new(0.0, 55.0, 240.0, 0.5));
        assert_eq!(l.separators[2], Rect::new(0.0, 110.0, 320.0, 0.5));
        assert_eq!(l.separators[3], Rect::new(0.0, 165.0, 240.0, 0.5));
        assert_eq!(l.separators[4], Rect::new(80.0, 0.0, 0.5, 220.0));
        assert_eq!(l.separators[5], Rect::new(160.0, 0.0, 0.5, 220.0));
        assert_eq!(l.separators[6], Rect::new(240.0, 0.0, 0.5, 220.0));

        let hidden = phone(320.0, 220.0, false);
        assert_eq!(hidden.separators[5], Rect::new(160.0, 0.0, 0.5, 165.0));
    }

    #[test]
    fn test_preferred_size() {
        let screen = Size::new(390.0, 844.0);
        assert_eq!(
            preferred_size(Size::new(0.0, 0.0), InterfaceIdiom::Phone, screen),
            Size::new(390.0, 220.0)
        );
        assert_eq!(
            preferred_size(Size::new(500.0, 10.0), InterfaceIdiom::Pad, screen),
            Size::new(500.0, 234.0)
        );
    }
}
