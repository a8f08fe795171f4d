use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position,
        }
    }
}

/// State of a continuous (pan-style) gesture spanning a whole widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

impl From<&PointerEventKind> for GesturePhase {
    fn from(kind: &PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Down(_) => GesturePhase::Began,
            PointerEventKind::Move => GesturePhase::Changed,
            PointerEventKind::Up(_) => GesturePhase::Ended,
            PointerEventKind::Cancel => GesturePhase::Cancelled,
        }
    }
}
