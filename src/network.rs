use std::fs;
use std::path::Path;

use bincode::{deserialize, serialize};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::{Result, YopError};
use crate::layers::DenseLayer;
use crate::optimizer::{Optimizer, OptimizerWrapper};

/// A feed-forward network: a stack of dense layers plus the optimizer that
/// updates them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NeuralNetwork {
    pub layers: Vec<DenseLayer>,
    pub optimizer: OptimizerWrapper,
}

impl NeuralNetwork {
    /// Create a new neural network with the given layer sizes, activations, and optimizer.
    /// `activations` must hold exactly one entry per consecutive pair of sizes.
    pub fn new(layer_sizes: &[usize], activations: &[Activation], optimizer: OptimizerWrapper) -> Result<Self> {
        if layer_sizes.len() < 2 {
            return Err(YopError::invalid_parameter(
                "layer_sizes",
                "must have at least input and output sizes",
            ));
        }
        if layer_sizes.len() - 1 != activations.len() {
            return Err(YopError::dimension_mismatch(
                format!("{} activations", layer_sizes.len() - 1),
                format!("{} activations", activations.len()),
            ));
        }

        let layers = layer_sizes
            .windows(2)
            .zip(activations.iter())
            .map(|(window, &activation)| DenseLayer::new(window[0], window[1], activation))
            .collect();

        Self::from_layers(layers, optimizer)
    }

    /// Wrap already-built layers, checking that each one's biases match its
    /// width and that its output feeds the next layer's input.
    pub fn from_layers(layers: Vec<DenseLayer>, optimizer: OptimizerWrapper) -> Result<Self> {
        if layers.is_empty() {
            return Err(YopError::invalid_parameter("layers", "must not be empty"));
        }
        for (i, layer) in layers.iter().enumerate() {
            if layer.biases.len() != layer.output_size() {
                return Err(YopError::dimension_mismatch(
                    format!("{} biases in layer {}", layer.output_size(), i),
                    format!("{} biases in layer {}", layer.biases.len(), i),
                ));
            }
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].output_size() != pair[1].input_size() {
                return Err(YopError::dimension_mismatch(
                    format!("{} inputs to layer {}", pair[0].output_size(), i + 1),
                    format!("{} inputs to layer {}", pair[1].input_size(), i + 1),
                ));
            }
        }
        Ok(NeuralNetwork { layers, optimizer })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map(DenseLayer::input_size).unwrap_or(0)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map(DenseLayer::output_size).unwrap_or(0)
    }

    /// Predict the output for a single input vector.
    pub fn forward(&self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        let output = self.forward_batch(input.insert_axis(Axis(0)))?;
        Ok(output.index_axis_move(Axis(0), 0))
    }

    /// Predict outputs for a batch of row vectors without touching training state.
    pub fn forward_batch(&self, inputs: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.check_input(inputs)?;
        let mut current_output = inputs.to_owned();
        for layer in &self.layers {
            current_output = layer.predict_batch(current_output.view());
        }
        Ok(current_output)
    }

    fn check_input(&self, inputs: ArrayView2<f32>) -> Result<()> {
        if inputs.ncols() != self.input_size() {
            return Err(YopError::dimension_mismatch(
                format!("{} input columns", self.input_size()),
                format!("{} input columns", inputs.ncols()),
            ));
        }
        Ok(())
    }

    fn forward_training(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        let mut current_output = inputs.to_owned();
        for layer in &mut self.layers {
            current_output = layer.forward_batch(current_output.view());
        }
        current_output
    }

    /// Backpropagate output errors through every layer, returning
    /// per-layer (weight, bias) gradients in layer order.
    fn backward_batch(&self, output_errors: ArrayView2<f32>) -> Result<Vec<(Array2<f32>, Array1<f32>)>> {
        let mut gradients = Vec::with_capacity(self.layers.len());
        let mut current_error = output_errors.to_owned();

        for (i, layer) in self.layers.iter().enumerate().rev() {
            let (adjusted_error, weight_gradients, bias_gradients) = layer.backward_batch(current_error.view())?;
            gradients.push((weight_gradients, bias_gradients));
            if i != 0 {
                current_error = adjusted_error.dot(&layer.weights.t());
            }
        }

        gradients.reverse();
        Ok(gradients)
    }

    /// One optimizer step on a batch toward `targets` under mean squared error.
    /// Returns the loss measured before the update.
    pub fn train_minibatch(
        &mut self,
        inputs: ArrayView2<f32>,
        targets: ArrayView2<f32>,
        learning_rate: f32,
    ) -> Result<f32> {
        self.check_input(inputs)?;
        if targets.dim() != (inputs.nrows(), self.output_size()) {
            return Err(YopError::dimension_mismatch(
                format!("{:?}", (inputs.nrows(), self.output_size())),
                format!("{:?}", targets.dim()),
            ));
        }

        let outputs = self.forward_training(inputs);
        let batch_size = inputs.nrows().max(1) as f32;
        let output_errors = (&outputs - &targets) / batch_size;
        let loss = (&outputs - &targets).mapv(|x| x * x).mean().unwrap_or(0.0);

        let gradients = self.backward_batch(output_errors.view())?;
        for (index, (layer, (weight_gradients, bias_gradients))) in
            self.layers.iter_mut().zip(gradients).enumerate()
        {
            self.optimizer.update_weights(index, &mut layer.weights, &weight_gradients, learning_rate);
            self.optimizer.update_biases(index, &mut layer.biases, &bias_gradients, learning_rate);
        }

        Ok(loss)
    }

    /// Serialize the network, layers and optimizer state, to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serialize(self)?;
        fs::write(path, serialized)?;
        Ok(())
    }

    /// Read back a network written by [`NeuralNetwork::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let buffer = fs::read(path)?;
        let network: Self = deserialize(&buffer)?;
        Self::from_layers(network.layers, network.optimizer)
            .map_err(|err| YopError::SerializationError(format!("inconsistent snapshot: {}", err)))
    }
}
