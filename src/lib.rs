//! # yop - a tiny grid-world learner
//!
//! A yop wanders a square grid looking for food. It chooses moves with a
//! small feed-forward network that predicts the reward of each direction,
//! and learns by replaying remembered transitions (Q-learning with
//! experience replay). The crate also carries a second, unrelated toy: a
//! point bouncing around a terminal grid.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yop::config::Config;
//! use yop::trainer::{Trainer, TrainerOptions};
//!
//! let options = TrainerOptions { draw: false, ..Default::default() };
//! let mut trainer = Trainer::new(Config::default(), options, std::io::stdout()).unwrap();
//! trainer.run(Some(10_000)).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - ReLU and linear activations
//! - [`agent`] - The [`agent::Brain`] that picks moves and learns
//! - [`bounce`] - The bouncing point animation
//! - [`config`] - Serde-backed configuration with defaults
//! - [`error`] - Error types and result handling
//! - [`layers`] - Dense layers
//! - [`metrics`] - The plain-text score log
//! - [`network`] - Feed-forward network with bincode snapshots
//! - [`optimizer`] - SGD and Adagrad
//! - [`replay_buffer`] - Fixed-capacity experience memory
//! - [`trainer`] - The main act/learn/report loop
//! - [`visualization`] - Terminal frames and ASCII score charts
//! - [`world`] - Grid, moves and reward shaping

pub mod activations;
pub mod agent;
pub mod bounce;
pub mod config;
pub mod error;
pub mod layers;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod replay_buffer;
pub mod trainer;
pub mod visualization;
pub mod world;

#[cfg(test)]
mod tests;
