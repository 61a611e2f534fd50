use ndarray::{arr1, arr2, Array2};
use tempfile::tempdir;

use crate::activations::Activation;
use crate::layers::DenseLayer;
use crate::network::NeuralNetwork;
use crate::optimizer::{Adagrad, OptimizerWrapper, SGD};

fn linear_targets(inputs: &Array2<f32>) -> Array2<f32> {
    let mut targets = Array2::zeros((inputs.nrows(), 1));
    for (i, row) in inputs.rows().into_iter().enumerate() {
        targets[[i, 0]] = 0.5 * row[0] - 0.3 * row[1] + 0.2;
    }
    targets
}

#[test]
fn test_neural_network_creation() {
    let network = NeuralNetwork::new(
        &[4, 10, 4],
        &[Activation::Relu, Activation::Linear],
        OptimizerWrapper::SGD(SGD::new()),
    )
    .unwrap();

    assert_eq!(network.layers.len(), 2);
    assert_eq!(network.layers[0].weights.shape(), [4, 10]);
    assert_eq!(network.layers[0].biases.shape(), [10]);
    assert_eq!(network.layers[1].weights.shape(), [10, 4]);
    assert_eq!(network.input_size(), 4);
    assert_eq!(network.output_size(), 4);
}

#[test]
fn test_creation_rejects_bad_shapes() {
    let optimizer = OptimizerWrapper::SGD(SGD::new());
    assert!(NeuralNetwork::new(&[4], &[], optimizer.clone()).is_err());
    assert!(NeuralNetwork::new(&[4, 10, 4], &[Activation::Relu], optimizer).is_err());
}

#[test]
fn test_forward_matches_batch() {
    let network = NeuralNetwork::new(
        &[3, 5, 2],
        &[Activation::Relu, Activation::Linear],
        OptimizerWrapper::SGD(SGD::new()),
    )
    .unwrap();

    let inputs = arr2(&[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]);
    let batch = network.forward_batch(inputs.view()).unwrap();
    assert_eq!(batch.shape(), [2, 2]);

    for i in 0..2 {
        let single = network.forward(inputs.row(i)).unwrap();
        for j in 0..2 {
            assert!((single[j] - batch[[i, j]]).abs() < 1e-6);
        }
    }
}

#[test]
fn test_forward_rejects_wrong_input_width() {
    let network = NeuralNetwork::new(&[3, 2], &[Activation::Linear], OptimizerWrapper::SGD(SGD::new())).unwrap();
    assert!(network.forward(arr1(&[1.0, 2.0]).view()).is_err());
}

#[test]
fn test_known_weights_forward() {
    let layer = DenseLayer::new(2, 1, Activation::Linear)
        .with_weights(arr2(&[[2.0], [-1.0]]))
        .unwrap()
        .with_biases(arr1(&[0.5]))
        .unwrap();
    let network = NeuralNetwork {
        layers: vec![layer],
        optimizer: OptimizerWrapper::SGD(SGD::new()),
    };
    let out = network.forward(arr1(&[1.0, 3.0]).view()).unwrap();
    assert!((out[0] - (-0.5)).abs() < 1e-6);
}

#[test]
fn test_relu_clips_negative_outputs() {
    let layer = DenseLayer::new(1, 2, Activation::Relu)
        .with_weights(arr2(&[[1.0, -1.0]]))
        .unwrap();
    let network = NeuralNetwork {
        layers: vec![layer],
        optimizer: OptimizerWrapper::SGD(SGD::new()),
    };
    let out = network.forward(arr1(&[2.0]).view()).unwrap();
    assert_eq!(out, arr1(&[2.0, 0.0]));
}

#[test]
fn test_sgd_training_reduces_loss() {
    let mut network = NeuralNetwork::new(&[2, 1], &[Activation::Linear], OptimizerWrapper::SGD(SGD::new())).unwrap();
    let inputs = arr2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.5]]);
    let targets = linear_targets(&inputs);

    let first = network.train_minibatch(inputs.view(), targets.view(), 0.1).unwrap();
    let mut last = first;
    for _ in 0..300 {
        last = network.train_minibatch(inputs.view(), targets.view(), 0.1).unwrap();
    }
    assert!(last < first, "loss went from {} to {}", first, last);
    assert!(last < 0.01);
}

#[test]
fn test_adagrad_training_reduces_loss() {
    let mut network = NeuralNetwork::new(&[2, 1], &[Activation::Linear], OptimizerWrapper::SGD(SGD::new())).unwrap();
    network.optimizer = OptimizerWrapper::Adagrad(Adagrad::default(&network.layers));
    let inputs = arr2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    let targets = linear_targets(&inputs);

    let first = network.train_minibatch(inputs.view(), targets.view(), 0.1).unwrap();
    let mut last = first;
    for _ in 0..300 {
        last = network.train_minibatch(inputs.view(), targets.view(), 0.1).unwrap();
    }
    assert!(last < first, "loss went from {} to {}", first, last);
}

#[test]
fn test_train_rejects_mismatched_targets() {
    let mut network = NeuralNetwork::new(&[2, 1], &[Activation::Linear], OptimizerWrapper::SGD(SGD::new())).unwrap();
    let inputs = arr2(&[[0.0, 0.0], [1.0, 0.0]]);
    let targets = arr2(&[[1.0]]);
    assert!(network.train_minibatch(inputs.view(), targets.view(), 0.1).is_err());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.bin");

    let network = NeuralNetwork::new(
        &[4, 10, 4],
        &[Activation::Relu, Activation::Linear],
        OptimizerWrapper::SGD(SGD::new()),
    )
    .unwrap();
    network.save(&path).unwrap();

    let loaded = NeuralNetwork::load(&path).unwrap();
    assert_eq!(loaded.layers.len(), 2);
    for (a, b) in network.layers.iter().zip(&loaded.layers) {
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.biases, b.biases);
        assert_eq!(a.activation, b.activation);
    }
}

#[test]
fn test_load_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.bin");
    std::fs::write(&path, b"definitely not a network").unwrap();
    assert!(NeuralNetwork::load(&path).is_err());
    assert!(NeuralNetwork::load(dir.path().join("missing.bin")).is_err());
}

#[test]
fn test_from_layers_rejects_unchained_layers() {
    let layers = vec![
        DenseLayer::new(4, 10, Activation::Relu),
        DenseLayer::new(7, 4, Activation::Linear),
    ];
    assert!(NeuralNetwork::from_layers(layers, OptimizerWrapper::SGD(SGD::new())).is_err());
    assert!(NeuralNetwork::from_layers(Vec::new(), OptimizerWrapper::SGD(SGD::new())).is_err());
}

#[test]
fn test_load_rejects_inconsistent_snapshot() {
    let dir = tempdir().unwrap();

    let unchained = dir.path().join("unchained.bin");
    NeuralNetwork {
        layers: vec![
            DenseLayer::new(4, 10, Activation::Relu),
            DenseLayer::new(7, 4, Activation::Linear),
        ],
        optimizer: OptimizerWrapper::SGD(SGD::new()),
    }
    .save(&unchained)
    .unwrap();
    assert!(NeuralNetwork::load(&unchained).is_err());

    let mut layer = DenseLayer::new(4, 4, Activation::Linear);
    layer.biases = arr1(&[0.0, 0.0]);
    let short_biases = dir.path().join("short_biases.bin");
    NeuralNetwork { layers: vec![layer], optimizer: OptimizerWrapper::SGD(SGD::new()) }
        .save(&short_biases)
        .unwrap();
    assert!(NeuralNetwork::load(&short_biases).is_err());
}
