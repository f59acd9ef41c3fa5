//! Fully-connected stacks with configurable activation and dropout.
//!
//! [`Mlp`] is the substrate for the relation heads `g` and `f` in
//! [`RelationNetwork`](crate::relation::RelationNetwork). It applies its
//! layers to the trailing dimension, so the same stack runs over flat
//! `[batch, features]` inputs and over per-pair `[batch, pairs, features]`
//! inputs alike.

use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::activation::Activation;

/// A stack of fully-connected layers.
///
/// The activation runs after every layer except (optionally) the last.
/// Dropout, when configured, runs after each hidden activation but never
/// after the output layer.
#[derive(Module, Debug)]
pub struct Mlp<B: Backend> {
    layers: Vec<Linear<B>>,
    dropout: Option<Dropout>,
    /// Activation selector, see [`Activation::from_index`]
    activation: usize,
    activate_last: bool,
    input_size: usize,
    output_size: usize,
}

impl<B: Backend> Mlp<B> {
    /// Create a new stack with one `Linear` per consecutive pair of `sizes`.
    ///
    /// # Arguments
    /// * `sizes` - Layer widths, input first. Must contain at least two entries.
    /// * `device` - Device to create the module on
    pub fn new(sizes: &[usize], device: &B::Device) -> Self {
        if sizes.len() < 2 {
            panic!(
                "Mlp requires at least an input and an output size, got {:?}",
                sizes
            );
        }

        let layers = sizes
            .windows(2)
            .map(|pair| {
                LinearConfig::new(pair[0], pair[1])
                    .with_bias(true)
                    .init(device)
            })
            .collect();

        Self {
            layers,
            dropout: None,
            activation: Activation::Relu.index(),
            activate_last: false,
            input_size: sizes[0],
            output_size: sizes[sizes.len() - 1],
        }
    }

    /// Set the activation applied between layers (default: ReLU).
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation.index();
        self
    }

    /// Enable dropout after each hidden activation.
    pub fn with_dropout(mut self, prob: f64) -> Self {
        self.dropout = Some(DropoutConfig::new(prob).init());
        self
    }

    /// Also activate the output layer (default: false).
    pub fn with_final_activation(mut self, activate_last: bool) -> Self {
        self.activate_last = activate_last;
        self
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the output size
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Number of fully-connected layers in the stack
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Get the configured activation
    pub fn activation(&self) -> Activation {
        Activation::from_index(self.activation)
    }

    /// Device the stack lives on
    pub(crate) fn device(&self) -> B::Device {
        self.layers[0].weight.device()
    }

    /// Apply the stack to the trailing dimension of `input`.
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let last = self.layers.len() - 1;
        let activation = self.activation();

        let mut x = input;
        for (i, layer) in self.layers.iter().enumerate() {
            x = layer.forward(x);

            if i < last || self.activate_last {
                x = activation.forward(x);
            }
            if i < last {
                if let Some(ref dropout) = self.dropout {
                    x = dropout.forward(x);
                }
            }
        }
        x
    }
}
