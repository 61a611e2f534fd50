use std::path::Path;

use log::{debug, info, warn};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activations::Activation;
use crate::config::BrainConfig;
use crate::error::{Result, YopError};
use crate::layers::DenseLayer;
use crate::network::NeuralNetwork;
use crate::optimizer::{Adagrad, OptimizerWrapper};
use crate::replay_buffer::{Experience, ReplayBuffer};
use crate::world::{Direction, World};

const STATE_SIZE: usize = 4;
const ACTION_SIZE: usize = 4;

/// Q-learning agent with experience replay.
///
/// The network maps a world's [`World::state_vector`] to one predicted
/// reward per [`Direction`]. Only the network is persisted; replay memory
/// starts empty on every run.
pub struct Brain {
    network: NeuralNetwork,
    memory: ReplayBuffer,
    score: i64,
    is_learning: bool,
    train_steps: u64,
    config: BrainConfig,
    rng: StdRng,
}

impl Brain {
    /// A brain with a freshly initialised 4 → hidden (ReLU) → 4 (linear) network.
    pub fn new(config: BrainConfig) -> Result<Self> {
        let network = Self::fresh_network(&config)?;
        Self::with_network(network, config)
    }

    /// Resume from a snapshot, or start fresh if it is missing, unreadable,
    /// or has the wrong shape.
    pub fn load_or_new<P: AsRef<Path>>(path: P, config: BrainConfig) -> Result<Self> {
        let path = path.as_ref();
        match NeuralNetwork::load(path) {
            Ok(network) if network.input_size() == STATE_SIZE && network.output_size() == ACTION_SIZE => {
                info!("loaded network snapshot from {}", path.display());
                Self::with_network(network, config)
            }
            Ok(network) => {
                warn!(
                    "snapshot {} maps {} inputs to {} outputs, expected {} to {}; starting fresh",
                    path.display(),
                    network.input_size(),
                    network.output_size(),
                    STATE_SIZE,
                    ACTION_SIZE
                );
                Self::new(config)
            }
            Err(err) => {
                warn!("could not load {} ({}); starting fresh", path.display(), err);
                Self::new(config)
            }
        }
    }

    fn fresh_network(config: &BrainConfig) -> Result<NeuralNetwork> {
        if config.hidden_size == 0 {
            return Err(YopError::invalid_parameter("hidden_size", "must be at least 1"));
        }
        let layers = vec![
            DenseLayer::new(STATE_SIZE, config.hidden_size, Activation::Relu),
            DenseLayer::new(config.hidden_size, ACTION_SIZE, Activation::Linear),
        ];
        let optimizer = OptimizerWrapper::Adagrad(Adagrad::default(&layers));
        NeuralNetwork::from_layers(layers, optimizer)
    }

    fn with_network(network: NeuralNetwork, config: BrainConfig) -> Result<Self> {
        if config.replay_size == 0 {
            return Err(YopError::invalid_parameter("replay_size", "must be at least 1"));
        }
        if config.rand_move_probability == 0 {
            return Err(YopError::invalid_parameter("rand_move_probability", "must be at least 1"));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Brain {
            network,
            memory: ReplayBuffer::new(config.memory_size),
            score: 0,
            is_learning: true,
            train_steps: 0,
            config,
            rng,
        })
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.network.save(path)?;
        info!("saved network snapshot to {}", path.display());
        Ok(())
    }

    /// Predicted reward of each direction, indexed by [`Direction::index`].
    pub fn predict_rewards(&self, world: &World) -> Result<Array1<f32>> {
        self.network.forward(world.state_vector().view())
    }

    /// Greedy move, replaced by a uniformly random one with probability
    /// `1 / rand_move_probability`.
    pub fn compute_move(&mut self, world: &World) -> Result<Direction> {
        let predicted = self.predict_rewards(world)?;
        let mut best = Direction::from_index(argmax(&predicted))?;

        if self.rng.gen_range(0..self.config.rand_move_probability) == 0 {
            best = Direction::random(&mut self.rng);
        }
        Ok(best)
    }

    /// The prediction for `experience.state` with the taken action's entry
    /// replaced by `reward + discount * max(prediction for next_state)`.
    pub fn compute_target(&self, experience: &Experience) -> Result<Array1<f32>> {
        let mut target = self.predict_rewards(&experience.state)?;
        let next = self.predict_rewards(&experience.next_state)?;
        target[experience.action.index()] = experience.reward + self.config.discount * max_value(next.iter().copied());
        Ok(target)
    }

    /// Credit `reward` to the score and, while learning, remember the
    /// transition and train on a replayed batch. Returns the loss of the
    /// last training pass if one ran.
    pub fn reward(&mut self, reward: i32, state: &World, action: Direction, next_state: &World) -> Result<Option<f32>> {
        self.score += i64::from(reward);

        if !self.is_learning {
            return Ok(None);
        }

        let experience = Experience {
            state: state.clone(),
            action,
            reward: reward as f32,
            next_state: next_state.clone(),
        };
        self.memory.add(experience, &mut self.rng);

        if self.memory.len() < self.config.replay_size {
            return Ok(None);
        }

        self.replay().map(Some)
    }

    fn replay(&mut self) -> Result<f32> {
        let replay_size = self.config.replay_size;
        let mut inputs = Array2::zeros((replay_size, STATE_SIZE));
        let mut next_inputs = Array2::zeros((replay_size, STATE_SIZE));
        let mut actions = Vec::with_capacity(replay_size);
        let mut rewards = Vec::with_capacity(replay_size);

        for (i, experience) in self.memory.sample(replay_size, &mut self.rng)?.into_iter().enumerate() {
            inputs.row_mut(i).assign(&experience.state.state_vector());
            next_inputs.row_mut(i).assign(&experience.next_state.state_vector());
            actions.push(experience.action.index());
            rewards.push(experience.reward);
        }

        let mut targets = self.network.forward_batch(inputs.view())?;
        let next_predictions = self.network.forward_batch(next_inputs.view())?;
        for (i, (&action, &reward)) in actions.iter().zip(&rewards).enumerate() {
            let best_next = max_value(next_predictions.row(i).iter().copied());
            targets[[i, action]] = reward + self.config.discount * best_next;
        }

        let mut loss = 0.0;
        for _ in 0..self.config.training_passes {
            loss = self.network.train_minibatch(inputs.view(), targets.view(), self.config.learning_rate)?;
        }
        self.train_steps += 1;
        debug!("replay step {}: loss {:.5}", self.train_steps, loss);

        Ok(loss)
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn stop_learning(&mut self) {
        self.is_learning = false;
    }

    pub fn is_learning(&self) -> bool {
        self.is_learning
    }

    pub fn train_steps(&self) -> u64 {
        self.train_steps
    }

    pub fn memory(&self) -> &ReplayBuffer {
        &self.memory
    }

    pub fn network(&self) -> &NeuralNetwork {
        &self.network
    }
}

/// Index of the largest value; the first one wins ties.
fn argmax(values: &Array1<f32>) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |(best_idx, best), (idx, &v)| {
            if v > best { (idx, v) } else { (best_idx, best) }
        })
        .0
}

fn max_value<I: Iterator<Item = f32>>(values: I) -> f32 {
    values.fold(f32::NEG_INFINITY, f32::max)
}
