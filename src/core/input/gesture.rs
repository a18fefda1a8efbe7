use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A discrete user action, already stripped of any toolkit specifics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Press { button: PointerButton, point: Point },
    Pan(PanDirection),
    /// Vertical wheel movement; positive is away from the user.
    Wheel { delta: f64 },
}
