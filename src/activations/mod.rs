//! # Activation Functions
//!
//! The brain's network only needs two: ReLU on the hidden layer and a
//! linear output so predicted rewards can go negative.

pub mod functions;

pub use functions::Activation;
