//! Relation Network module.
//!
//! Reference: Santoro et al., "A simple neural network module for relational
//! reasoning", NeurIPS 2017.
//!
//! A Relation Network computes a learned relation function `g` over all
//! ordered pairs of objects in a set, aggregates the per-pair relations with
//! a symmetric pooling, and post-processes the aggregate with a second
//! stack `f`:
//!
//! ```text
//! RN(O) = f( sum_{i,j} g(o_i, o_j, q) )
//! ```
//!
//! The pair construction is a broadcast-and-concatenate over the object
//! axis, so the module works for any number of objects without
//! reconfiguration. An optional context vector `q` (e.g. a question
//! embedding) is appended to every pair.

use burn::module::{Module, Param};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::mlp::Mlp;

/// Pooling applied over the pair axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aggregation {
    /// Sum over all pairs (the published formulation)
    #[default]
    Sum,
    /// Mean over active pairs
    Mean,
}

/// Relation Network over a set of objects.
///
/// The relation head `g` runs on every ordered pair `(o_i, o_j)`; its output
/// is pooled over the pair axis and fed to the readout head `f`. Both heads
/// are [`Mlp`] stacks; `g` is activated after every layer while `f` ends in
/// a raw linear output.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct RelationNetwork<B: Backend> {
    /// Relation head, applied per pair
    g: Mlp<B>,
    /// Readout head, applied to the pooled relations
    f: Mlp<B>,
    object_size: usize,
    /// Width of the context vector, 0 when unconditioned
    context_size: usize,
    relation_size: usize,
    output_size: usize,
    g_layers: usize,
    f_layers: usize,
    /// Dropout probability for the readout head, 0.0 disables it
    dropout: f64,
    /// Activation selector, see [`Activation::from_index`]
    activation: usize,
    /// Aggregation selector: 0=Sum, 1=Mean
    aggregation: usize,
    /// Per-pair weights, `[n_objects, n_objects]`, zero excludes a pair
    pair_mask: Option<Param<Tensor<B, 2>>>,
    /// Number of non-zero mask entries
    active_pairs: f32,
}

impl<B: Backend> RelationNetwork<B> {
    /// Create a new Relation Network.
    ///
    /// Defaults: three relation layers of width `relation_size`, two readout
    /// layers, ReLU activation, sum aggregation, no context, no dropout.
    ///
    /// # Arguments
    /// * `object_size` - Feature width of each object
    /// * `relation_size` - Width of the per-pair relation representation
    /// * `output_size` - Width of the final output
    /// * `device` - Device to create the module on
    pub fn new(
        object_size: usize,
        relation_size: usize,
        output_size: usize,
        device: &B::Device,
    ) -> Self {
        let g_layers = 3;
        let f_layers = 2;
        let activation = Activation::Relu;

        let g = Self::build_g(object_size, 0, relation_size, g_layers, activation, device);
        let f = Self::build_f(relation_size, output_size, f_layers, 0.0, activation, device);

        Self {
            g,
            f,
            object_size,
            context_size: 0,
            relation_size,
            output_size,
            g_layers,
            f_layers,
            dropout: 0.0,
            activation: activation.index(),
            aggregation: 0,
            pair_mask: None,
            active_pairs: 0.0,
        }
    }

    fn build_g(
        object_size: usize,
        context_size: usize,
        relation_size: usize,
        layers: usize,
        activation: Activation,
        device: &B::Device,
    ) -> Mlp<B> {
        let mut sizes = Vec::with_capacity(layers + 1);
        sizes.push(2 * object_size + context_size);
        sizes.extend(std::iter::repeat(relation_size).take(layers));

        Mlp::new(&sizes, device)
            .with_activation(activation)
            .with_final_activation(true)
    }

    fn build_f(
        relation_size: usize,
        output_size: usize,
        layers: usize,
        dropout: f64,
        activation: Activation,
        device: &B::Device,
    ) -> Mlp<B> {
        let mut sizes = Vec::with_capacity(layers + 1);
        sizes.push(relation_size);
        sizes.extend(std::iter::repeat(relation_size).take(layers - 1));
        sizes.push(output_size);

        let mut f = Mlp::new(&sizes, device).with_activation(activation);
        if dropout > 0.0 {
            f = f.with_dropout(dropout);
        }
        f
    }

    fn rebuild_g(&mut self) {
        self.g = Self::build_g(
            self.object_size,
            self.context_size,
            self.relation_size,
            self.g_layers,
            Activation::from_index(self.activation),
            &self.g.device(),
        );
    }

    fn rebuild_f(&mut self) {
        self.f = Self::build_f(
            self.relation_size,
            self.output_size,
            self.f_layers,
            self.dropout,
            Activation::from_index(self.activation),
            &self.f.device(),
        );
    }

    /// Condition every pair on a context vector of the given width.
    ///
    /// Rebuilds the relation head, so call this before training.
    pub fn with_context_size(mut self, context_size: usize) -> Self {
        self.context_size = context_size;
        self.rebuild_g();
        self
    }

    /// Set the depth of the relation head (default: 3).
    pub fn with_g_layers(mut self, layers: usize) -> Self {
        if layers == 0 {
            panic!("Relation head needs at least one layer");
        }
        self.g_layers = layers;
        self.rebuild_g();
        self
    }

    /// Set the depth of the readout head (default: 2).
    pub fn with_f_layers(mut self, layers: usize) -> Self {
        if layers == 0 {
            panic!("Readout head needs at least one layer");
        }
        self.f_layers = layers;
        self.rebuild_f();
        self
    }

    /// Enable dropout in the readout head.
    pub fn with_dropout(mut self, prob: f64) -> Self {
        self.dropout = prob;
        self.rebuild_f();
        self
    }

    /// Set the activation used by both heads (default: ReLU).
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation.index();
        self.rebuild_g();
        self.rebuild_f();
        self
    }

    /// Set the pooling over the pair axis (default: sum).
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = match aggregation {
            Aggregation::Sum => 0,
            Aggregation::Mean => 1,
        };
        self
    }

    /// Weight (or exclude) pairs with a `[n_objects, n_objects]` matrix.
    ///
    /// Entry `(i, j)` scales the relation of pair `(o_i, o_j)`; a zero entry
    /// removes the pair from the aggregate. Magnitudes are taken, matching
    /// the polarity convention of adjacency-style matrices. Panics if the
    /// matrix is not square.
    pub fn with_pair_mask(mut self, mask: Array2<f32>, device: &B::Device) -> Self {
        let shape = mask.shape();
        if shape[0] != shape[1] {
            panic!(
                "Pair mask must be square, got [{}, {}]",
                shape[0], shape[1]
            );
        }

        self.active_pairs = mask.iter().filter(|&&x| x != 0.0).count() as f32;

        let data: Vec<f32> = mask.iter().map(|&x| x.abs()).collect();
        let tensor: Tensor<B, 2> =
            Tensor::<B, 1>::from_floats(data.as_slice(), device).reshape([shape[0], shape[1]]);
        self.pair_mask = Some(Param::from_tensor(tensor));
        self
    }

    /// Get the object feature width
    pub fn object_size(&self) -> usize {
        self.object_size
    }

    /// Get the context width (0 when unconditioned)
    pub fn context_size(&self) -> usize {
        self.context_size
    }

    /// Get the relation representation width
    pub fn relation_size(&self) -> usize {
        self.relation_size
    }

    /// Get the output width
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Get the configured aggregation
    pub fn aggregation(&self) -> Aggregation {
        match self.aggregation {
            1 => Aggregation::Mean,
            _ => Aggregation::Sum,
        }
    }

    /// Check if a pair mask is configured
    pub fn has_pair_mask(&self) -> bool {
        self.pair_mask.is_some()
    }

    /// All ordered pairs of objects: `[batch, n * n, 2 * object_size]`.
    ///
    /// Row `i * n + j` holds the concatenation of `o_i` and `o_j`.
    fn build_pairs(&self, objects: Tensor<B, 3>) -> Tensor<B, 3> {
        let [batch_size, num_objects, object_size] = objects.dims();
        let num_pairs = num_objects * num_objects;

        let left = objects
            .clone()
            .unsqueeze_dim::<4>(2)
            .expand([batch_size, num_objects, num_objects, object_size])
            .reshape([batch_size, num_pairs, object_size]);
        let right = objects
            .unsqueeze_dim::<4>(1)
            .expand([batch_size, num_objects, num_objects, object_size])
            .reshape([batch_size, num_pairs, object_size]);

        Tensor::cat(vec![left, right], 2)
    }

    /// Forward pass over a set of objects.
    ///
    /// # Arguments
    /// * `objects` - Object set of shape `[batch, n_objects, object_size]`
    /// * `context` - Context vector of shape `[batch, context_size]`;
    ///   required exactly when the network was built with
    ///   [`with_context_size`](Self::with_context_size)
    ///
    /// # Returns
    /// Output tensor of shape `[batch, output_size]`
    pub fn forward(&self, objects: Tensor<B, 3>, context: Option<Tensor<B, 2>>) -> Tensor<B, 2> {
        let [batch_size, num_objects, _] = objects.dims();
        let num_pairs = num_objects * num_objects;

        let mut pairs = self.build_pairs(objects);

        match context {
            Some(ctx) => {
                if self.context_size == 0 {
                    panic!(
                        "Context given to an unconditioned RelationNetwork. \
                         Configure it with with_context_size first."
                    );
                }
                let ctx_width = ctx.dims()[1];
                if ctx_width != self.context_size {
                    panic!(
                        "Context width mismatch: expected {}, got {}",
                        self.context_size, ctx_width
                    );
                }

                let ctx = ctx
                    .unsqueeze_dim::<3>(1)
                    .expand([batch_size, num_pairs, ctx_width]);
                pairs = Tensor::cat(vec![pairs, ctx], 2);
            }
            None => {
                if self.context_size != 0 {
                    panic!(
                        "RelationNetwork was configured for a context of width {} \
                         but none was given",
                        self.context_size
                    );
                }
            }
        }

        let mut relations = self.g.forward(pairs);

        if let Some(ref mask) = self.pair_mask {
            let mask_dims = mask.val().dims();
            if mask_dims[0] != num_objects {
                panic!(
                    "Pair mask is [{}, {}] but the input has {} objects",
                    mask_dims[0], mask_dims[1], num_objects
                );
            }
            let weights = mask
                .val()
                .reshape([1, num_pairs, 1])
                .expand([batch_size, num_pairs, self.relation_size]);
            relations = relations * weights;
        }

        let mut pooled = relations.sum_dim(1).squeeze(1);

        if self.aggregation() == Aggregation::Mean {
            let count = if self.pair_mask.is_some() {
                self.active_pairs
            } else {
                num_pairs as f32
            };
            pooled = pooled.div_scalar(count.max(1.0));
        }

        self.f.forward(pooled)
    }
}
