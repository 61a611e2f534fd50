//! # Agent
//!
//! The yop's decision maker. [`Brain`] predicts the reward of each of the
//! four moves with a small network, picks the best one (occasionally a
//! random one instead), and learns from replayed experience.
//!
//! ```rust,no_run
//! use yop::agent::Brain;
//! use yop::config::BrainConfig;
//! use yop::world::World;
//!
//! let mut brain = Brain::load_or_new("brain.net", BrainConfig::default()).unwrap();
//! let mut rng = rand::thread_rng();
//! let world = World::new(20, &mut rng).unwrap();
//! let direction = brain.compute_move(&world).unwrap();
//! let transition = world.step(direction, &mut rng);
//! brain.reward(transition.reward, &world, direction, &transition.next).unwrap();
//! ```

mod brain;
pub use brain::Brain;
