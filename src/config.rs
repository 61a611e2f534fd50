use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, YopError};

/// Configuration for the grid the yop lives in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square grid
    pub size: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { size: 20 }
    }
}

/// Hyperparameters of the learning agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrainConfig {
    /// Maximum number of experiences kept for replay
    pub memory_size: usize,
    /// Experiences sampled per training step; training starts once this many are stored
    pub replay_size: usize,
    /// A random move is taken with probability 1 / this
    pub rand_move_probability: u32,
    /// Weight of the best next-state prediction in the target
    pub discount: f32,
    pub learning_rate: f32,
    /// Optimizer passes over each sampled batch
    pub training_passes: usize,
    pub hidden_size: usize,
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            memory_size: 1_000_000,
            replay_size: 500,
            rand_move_probability: 100,
            discount: 0.75,
            learning_rate: 0.1,
            training_passes: 5,
            hidden_size: 10,
            seed: None,
        }
    }
}

/// Settings of the training loop itself
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Snapshot the network every this many iterations
    pub save_freq: u64,
    /// Log the score delta every this many iterations when not drawing
    pub report_interval: u64,
    /// Pause between steps in demo mode
    pub demo_delay_ms: u64,
    pub snapshot_path: PathBuf,
    pub score_log_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            save_freq: 10_000,
            report_interval: 1_000,
            demo_delay_ms: 100,
            snapshot_path: PathBuf::from("brain.net"),
            score_log_path: PathBuf::from("score.dat"),
        }
    }
}

/// Everything the `yop` binary can be configured with, as read from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub brain: BrainConfig,
    pub run: RunConfig,
}

impl Config {
    /// Load a JSON config file. Keys that are absent keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.world.size < 1 {
            return Err(YopError::invalid_parameter("world.size", "must be at least 1"));
        }
        if self.brain.replay_size == 0 || self.brain.replay_size > self.brain.memory_size {
            return Err(YopError::invalid_parameter(
                "brain.replay_size",
                "must be between 1 and brain.memory_size",
            ));
        }
        if self.brain.rand_move_probability == 0 {
            return Err(YopError::invalid_parameter("brain.rand_move_probability", "must be at least 1"));
        }
        if self.run.report_interval == 0 || self.run.save_freq == 0 {
            return Err(YopError::invalid_parameter("run", "intervals must be at least 1"));
        }
        Ok(())
    }
}
