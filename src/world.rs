//! The grid the yop walks around in, looking for food.

use ndarray::{array, Array1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, YopError};

/// A cell on the grid; `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    fn random<R: Rng + ?Sized>(size: i32, rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..size), rng.gen_range(0..size))
    }
}

/// The four moves. The discriminant is the index of the matching network output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Direction::ALL
            .get(index)
            .copied()
            .ok_or(YopError::InvalidAction { action: index, max_actions: Direction::ALL.len() })
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// What a single step did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move would have left the grid; nothing changed
    Blocked,
    /// The yop reached the food, which then respawned
    Ate,
    /// An ordinary move, rewarded by the change in distance to the food
    Moved,
}

/// The result of applying a move to a world.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: World,
    pub reward: i32,
    pub outcome: Outcome,
}

/// Positions of the food and the yop on a `size × size` grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub size: i32,
    pub food: Position,
    pub yop: Position,
}

impl World {
    /// A world with food and yop placed uniformly at random. They may share a cell.
    pub fn new<R: Rng + ?Sized>(size: i32, rng: &mut R) -> Result<Self> {
        if size < 1 {
            return Err(YopError::invalid_parameter("size", "world must be at least 1x1"));
        }
        let food = Position::random(size, rng);
        let yop = Position::random(size, rng);
        Ok(Self { size, food, yop })
    }

    pub fn with_positions(size: i32, food: Position, yop: Position) -> Result<Self> {
        let world = Self { size, food, yop };
        if size < 1 || !world.contains(food) || !world.contains(yop) {
            return Err(YopError::invalid_parameter(
                "positions".to_string(),
                format!("food {:?} and yop {:?} must lie inside a {}x{} grid", food, yop, size, size),
            ));
        }
        Ok(world)
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    pub fn is_food_eaten(&self) -> bool {
        self.food == self.yop
    }

    /// Move the yop one cell. Returns false, leaving the world untouched,
    /// when that would step off the grid.
    pub fn move_if_possible(&mut self, direction: Direction) -> bool {
        let next = self.yop.offset(direction.delta());
        if self.contains(next) {
            self.yop = next;
            true
        } else {
            false
        }
    }

    pub fn move_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.food = Position::random(self.size, rng);
    }

    pub fn distance_to_food(&self) -> i32 {
        self.food.manhattan(self.yop)
    }

    /// Network input: food then yop coordinates, scaled by the grid size.
    pub fn state_vector(&self) -> Array1<f32> {
        let size = self.size as f32;
        array![
            self.food.x as f32 / size,
            self.food.y as f32 / size,
            self.yop.x as f32 / size,
            self.yop.y as f32 / size,
        ]
    }

    /// Apply a move and score it: -1 for bumping a wall, +1 for eating,
    /// otherwise the clamped decrease in distance to the food.
    pub fn step<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Transition {
        let mut next = self.clone();

        if !next.move_if_possible(direction) {
            return Transition { next, reward: -1, outcome: Outcome::Blocked };
        }

        if next.is_food_eaten() {
            next.move_food(rng);
            return Transition { next, reward: 1, outcome: Outcome::Ate };
        }

        let reward = (self.distance_to_food() - next.distance_to_food()).clamp(-1, 1);
        Transition { next, reward, outcome: Outcome::Moved }
    }
}
