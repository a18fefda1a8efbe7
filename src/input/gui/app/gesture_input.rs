use crate::core::data::point::Point;
use crate::core::input::gesture::{Gesture, PanDirection, PointerButton};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Gesture(Gesture),
    Exit,
}

pub fn key_action(key_code: KeyCode, state: ElementState) -> Option<InputAction> {
    if state != ElementState::Pressed {
        return None;
    }

    let direction = match key_code {
        KeyCode::Escape => return Some(InputAction::Exit),
        KeyCode::ArrowLeft => PanDirection::Left,
        KeyCode::ArrowRight => PanDirection::Right,
        KeyCode::ArrowUp => PanDirection::Up,
        KeyCode::ArrowDown => PanDirection::Down,
        _ => return None,
    };

    Some(InputAction::Gesture(Gesture::Pan(direction)))
}

pub fn mouse_button_gesture(
    button: MouseButton,
    state: ElementState,
    cursor: Point,
) -> Option<Gesture> {
    if state != ElementState::Pressed {
        return None;
    }

    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    };

    Some(Gesture::Press {
        button,
        point: cursor,
    })
}

/// Only the vertical component counts.
pub fn wheel_gesture(delta: MouseScrollDelta) -> Option<Gesture> {
    let delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if delta == 0.0 {
        return None;
    }

    Some(Gesture::Wheel { delta })
}

pub fn cursor_point(position: PhysicalPosition<f64>) -> Point {
    Point {
        x: position.x.floor() as i32,
        y: position.y.floor() as i32,
    }
}
