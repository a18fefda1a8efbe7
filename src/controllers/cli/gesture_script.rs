use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::input::gesture::{Gesture, PanDirection, PointerButton};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureParseError {
    #[error("expected KIND:ARGUMENT, got '{0}'")]
    MissingArgument(String),
    #[error("unknown gesture kind '{0}'")]
    UnknownKind(String),
    #[error("expected X,Y pixel coordinates, got '{0}'")]
    InvalidPoint(String),
    #[error("unknown pan direction '{0}'")]
    UnknownDirection(String),
    #[error("wheel takes 'up' or 'down', got '{0}'")]
    UnknownWheelDirection(String),
}

/// One scripted gesture from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStep {
    ZoomIn(Point),
    ZoomOut(Point),
    Pan(PanDirection),
    WheelUp,
    WheelDown,
}

impl GestureStep {
    #[must_use]
    pub fn gesture(self) -> Gesture {
        match self {
            Self::ZoomIn(point) => Gesture::Press {
                button: PointerButton::Primary,
                point,
            },
            Self::ZoomOut(point) => Gesture::Press {
                button: PointerButton::Secondary,
                point,
            },
            Self::Pan(direction) => Gesture::Pan(direction),
            Self::WheelUp => Gesture::Wheel { delta: 1.0 },
            Self::WheelDown => Gesture::Wheel { delta: -1.0 },
        }
    }
}

fn parse_point(value: &str) -> Result<Point, GestureParseError> {
    let invalid = || GestureParseError::InvalidPoint(value.to_owned());
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;

    Ok(Point {
        x: x.trim().parse().map_err(|_| invalid())?,
        y: y.trim().parse().map_err(|_| invalid())?,
    })
}

fn parse_direction(value: &str) -> Result<PanDirection, GestureParseError> {
    match value {
        "left" => Ok(PanDirection::Left),
        "right" => Ok(PanDirection::Right),
        "up" => Ok(PanDirection::Up),
        "down" => Ok(PanDirection::Down),
        _ => Err(GestureParseError::UnknownDirection(value.to_owned())),
    }
}

/// Parses `zoom-in:X,Y`, `zoom-out:X,Y`, `pan:DIRECTION` or `wheel:up|down`.
pub fn parse_gesture_step(value: &str) -> Result<GestureStep, GestureParseError> {
    let lowered = value.trim().to_ascii_lowercase();
    let (kind, argument) = lowered
        .split_once(':')
        .ok_or_else(|| GestureParseError::MissingArgument(value.to_owned()))?;

    match kind {
        "zoom-in" => Ok(GestureStep::ZoomIn(parse_point(argument)?)),
        "zoom-out" => Ok(GestureStep::ZoomOut(parse_point(argument)?)),
        "pan" => Ok(GestureStep::Pan(parse_direction(argument)?)),
        "wheel" => match argument {
            "up" => Ok(GestureStep::WheelUp),
            "down" => Ok(GestureStep::WheelDown),
            _ => Err(GestureParseError::UnknownWheelDirection(argument.to_owned())),
        },
        _ => Err(GestureParseError::UnknownKind(kind.to_owned())),
    }
}
