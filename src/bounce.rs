//! A point bouncing around a bounded grid. No decisions, no learning.

use serde::{Deserialize, Serialize};

use crate::error::{Result, YopError};
use crate::world::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bouncer {
    width: i32,
    height: i32,
    pos: Position,
    velocity: (i32, i32),
}

impl Bouncer {
    /// Start in the top-left corner moving diagonally down-right.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::with_state(width, height, Position::new(0, 0), (1, 1))
    }

    pub fn with_state(width: i32, height: i32, pos: Position, velocity: (i32, i32)) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(YopError::invalid_parameter(
                "dimensions".to_string(),
                format!("grid must be at least 1x1, got {}x{}", width, height),
            ));
        }
        if !(0..width).contains(&pos.x) || !(0..height).contains(&pos.y) {
            return Err(YopError::invalid_parameter(
                "pos".to_string(),
                format!("{:?} lies outside a {}x{} grid", pos, width, height),
            ));
        }
        if velocity.0.abs() > 1 || velocity.1.abs() > 1 {
            return Err(YopError::invalid_parameter(
                "velocity".to_string(),
                format!("components must be -1, 0 or 1, got {:?}", velocity),
            ));
        }
        Ok(Self { width, height, pos, velocity })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn velocity(&self) -> (i32, i32) {
        self.velocity
    }

    /// Advance one frame. A component that would carry the point off the
    /// grid is reversed before moving.
    pub fn step(&mut self) {
        let (x, vx) = bounce_axis(self.pos.x, self.velocity.0, self.width);
        let (y, vy) = bounce_axis(self.pos.y, self.velocity.1, self.height);
        self.pos = Position::new(x, y);
        self.velocity = (vx, vy);
    }
}

fn bounce_axis(pos: i32, velocity: i32, extent: i32) -> (i32, i32) {
    let next = pos + velocity;
    if (0..extent).contains(&next) {
        return (next, velocity);
    }
    let reversed = -velocity;
    let next = pos + reversed;
    if (0..extent).contains(&next) {
        (next, reversed)
    } else {
        // One cell wide: nowhere to go on this axis.
        (pos, reversed)
    }
}
