use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::delegate::KeyInput;

/// A minimal text buffer that can be bound to a keypad.
#[derive(Clone, Debug, Default)]
pub struct NumberFieldState {
    pub text: String,
    pub selection: Range<usize>,
    pub focused: bool,
    pub resign_count: usize,
}

fn floor_char_boundary(text: &str, byte: usize) -> usize {
    let mut i = byte.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// find prev grapheme boundary before a byte index
fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

impl NumberFieldState {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
            focused: true,
            resign_count: 0,
        }
    }

    /// Selection ordered and snapped to char boundaries inside `text`.
    fn normalized_selection(&self) -> Range<usize> {
        let a = floor_char_boundary(&self.text, self.selection.start);
        let b = floor_char_boundary(&self.text, self.selection.end);
        a.min(b)..a.max(b)
    }

    /// Parses the current text with `separator` as the decimal point.
    pub fn value(&self, separator: &str) -> Option<f64> {
        self.text.replace(separator, ".").parse().ok()
    }
}

impl KeyInput for NumberFieldState {
    fn insert_text(&mut self, text: &str) {
        let Range { start, end } = self.normalized_selection();

        self.text.replace_range(start..end, text);
        let new_pos = start + text.len();
        self.selection = new_pos..new_pos;
    }

    fn delete_backward(&mut self) {
        let sel = self.normalized_selection();
        if sel.is_empty() {
            let pos = sel.start;
            self.selection = sel;
            if pos > 0 {
                let prev = prev_grapheme_boundary(&self.text, pos);
                self.text.replace_range(prev..pos, "");
                self.selection = prev..prev;
            }
        } else {
            self.insert_text("");
        }
    }

    fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    fn resign_first_responder(&mut self) {
        self.focused = false;
        self.resign_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_insert() {
        let mut state = NumberFieldState::new();
        state.insert_text("12");
        state.insert_text(",");
        state.insert_text("5");
        assert_eq!(state.text, "12,5");
        assert_eq!(state.selection, 4..4);
        assert_eq!(state.value(","), Some(12.5));
    }

    #[test]
    fn test_field_delete_backward() {
        let mut state = NumberFieldState::with_text("42");
        state.delete_backward();
        assert_eq!(state.text, "4");
        state.delete_backward();
        state.delete_backward();
        assert_eq!(state.text, "");
        assert!(!state.has_text());
    }

    #[test]
    fn test_field_delete_selection() {
        let mut state = NumberFieldState::with_text("12345");
        state.selection = 1..3;
        state.delete_backward();
        assert_eq!(state.text, "145");
        assert_eq!(state.selection, 1..1);
    }

    #[test]
    fn test_field_delete_whole_grapheme() {
        let mut state = NumberFieldState::with_text("1٫5");
        state.delete_backward();
        state.delete_backward();
        assert_eq!(state.text, "1");
    }

    #[test]
    fn test_field_tolerates_inverted_and_mid_char_selection() {
        let mut state = NumberFieldState::with_text("12345");
        state.selection = 3..1;
        state.insert_text("9");
        assert_eq!(state.text, "1945");
        assert_eq!(state.selection, 2..2);

        // byte 2 is inside the two-byte separator
        let mut state = NumberFieldState::with_text("1٫5");
        state.selection = 2..2;
        state.insert_text("0");
        assert_eq!(state.text, "10٫5");

        let mut state = NumberFieldState::with_text("1٫5");
        state.selection = 2..99;
        state.delete_backward();
        assert_eq!(state.text, "1");

        let mut state = NumberFieldState::with_text("1٫5");
        state.selection = 2..2;
        state.delete_backward();
        assert_eq!(state.text, "٫5");
    }

    #[test]
    fn test_field_resign() {
        let mut state = NumberFieldState::new();
        assert!(state.focused);
        state.resign_first_responder();
        assert!(!state.focused);
        assert_eq!(state.resign_count, 1);
    }
}
