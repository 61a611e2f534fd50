use rand::Rng;

use crate::error::{Result, YopError};
use crate::world::{Direction, World};

#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: World,
    pub action: Direction,
    pub reward: f32,
    pub next_state: World,
}

/// Fixed-capacity experience store. Appends until full, then each new
/// experience replaces a uniformly chosen old one.
#[derive(Clone, Debug)]
pub struct ReplayBuffer {
    buffer: Vec<Experience>,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            // Capacity can be a million; let the Vec grow as needed.
            buffer: Vec::new(),
            capacity,
        }
    }

    pub fn add<R: Rng + ?Sized>(&mut self, experience: Experience, rng: &mut R) {
        if self.capacity == 0 {
            return;
        }
        if self.is_full() {
            let slot = rng.gen_range(0..self.capacity);
            self.buffer[slot] = experience;
        } else {
            self.buffer.push(experience);
        }
    }

    /// Draw `batch_size` experiences uniformly, with replacement.
    pub fn sample<R: Rng + ?Sized>(&self, batch_size: usize, rng: &mut R) -> Result<Vec<&Experience>> {
        if self.buffer.is_empty() {
            return Err(YopError::EmptyBuffer(format!("cannot sample {} experiences", batch_size)));
        }
        Ok((0..batch_size)
            .map(|_| &self.buffer[rng.gen_range(0..self.buffer.len())])
            .collect())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.buffer.iter()
    }
}
