use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::layers::DenseLayer;

/// Parameter update rule. `layer` is the index of the layer being updated so
/// stateful rules can keep one accumulator per layer.
pub trait Optimizer {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32);
    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32);
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum OptimizerWrapper {
    SGD(SGD),
    Adagrad(Adagrad),
}

impl Optimizer for OptimizerWrapper {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        match self {
            OptimizerWrapper::SGD(optimizer) => optimizer.update_weights(layer, weights, gradients, learning_rate),
            OptimizerWrapper::Adagrad(optimizer) => optimizer.update_weights(layer, weights, gradients, learning_rate),
        }
    }

    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        match self {
            OptimizerWrapper::SGD(optimizer) => optimizer.update_biases(layer, biases, gradients, learning_rate),
            OptimizerWrapper::Adagrad(optimizer) => optimizer.update_biases(layer, biases, gradients, learning_rate),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SGD;

impl SGD {
    pub fn new() -> SGD {
        SGD
    }
}

impl Default for SGD {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer for SGD {
    fn update_weights(&mut self, _layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        weights.zip_mut_with(gradients, |w, &g| *w -= learning_rate * g);
    }

    fn update_biases(&mut self, _layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        biases.zip_mut_with(gradients, |b, &g| *b -= learning_rate * g);
    }
}

/// Adagrad: each parameter's step is scaled by the inverse root of its
/// accumulated squared gradients.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Adagrad {
    pub epsilon: f32,
    g_weights: Vec<Array2<f32>>,
    g_biases: Vec<Array1<f32>>,
}

impl Adagrad {
    pub fn new(layers: &[DenseLayer], epsilon: f32) -> Self {
        let g_weights = layers
            .iter()
            .map(|layer| Array2::<f32>::zeros(layer.weights.dim()))
            .collect();
        let g_biases = layers
            .iter()
            .map(|layer| Array1::<f32>::zeros(layer.biases.dim()))
            .collect();

        Adagrad {
            epsilon,
            g_weights,
            g_biases,
        }
    }

    pub fn default(layers: &[DenseLayer]) -> Self {
        Self::new(layers, 1e-6)
    }
}

impl Optimizer for Adagrad {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        if self.g_weights.len() <= layer {
            self.g_weights.resize(layer + 1, Array2::zeros((0, 0)));
        }
        let acc = &mut self.g_weights[layer];
        if acc.dim() != weights.dim() {
            *acc = Array2::zeros(weights.dim());
        }
        acc.zip_mut_with(gradients, |a, &g| *a += g * g);

        let epsilon = self.epsilon;
        ndarray::Zip::from(weights)
            .and(&*acc)
            .and(gradients)
            .for_each(|w, &a, &g| *w -= learning_rate * g / (a.sqrt() + epsilon));
    }

    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        if self.g_biases.len() <= layer {
            self.g_biases.resize(layer + 1, Array1::zeros(0));
        }
        let acc = &mut self.g_biases[layer];
        if acc.dim() != biases.dim() {
            *acc = Array1::zeros(biases.dim());
        }
        acc.zip_mut_with(gradients, |a, &g| *a += g * g);

        let epsilon = self.epsilon;
        ndarray::Zip::from(biases)
            .and(&*acc)
            .and(gradients)
            .for_each(|b, &a, &g| *b -= learning_rate * g / (a.sqrt() + epsilon));
    }
}
