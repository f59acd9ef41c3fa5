//! Long Short-Term Memory cell.
//!
//! Reference: Hochreiter & Schmidhuber, "Long short-term memory",
//! Neural Computation 1997.

use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Single-timestep LSTM cell.
///
/// Maintains a hidden state `h` and a cell (memory) state `c`, updated via
/// input/forget/output gates:
///
/// - `i = sigmoid(z_i)`
/// - `f = sigmoid(z_f + beta)`
/// - `g = tanh(z_g)`
/// - `o = sigmoid(z_o)`
/// - `c' = f * c + i * g`
/// - `h' = o * tanh(c')`
///
/// where `z = W_x x + b + W_h h` is a single fused transformation split into
/// the four gate pre-activations, and `beta` is the forget-gate bias offset
/// (default 1.0, so the cell starts out remembering).
#[derive(Module, Debug)]
pub struct LSTMCell<B: Backend> {
    input_size: usize,
    hidden_size: usize,
    /// Offset added to the forget-gate pre-activation
    forget_bias: f32,
    /// Maps input to the 4 fused gate pre-activations (with bias)
    input_weights: Linear<B>,
    /// Maps hidden state to the 4 fused gate pre-activations (no bias)
    recurrent_weights: Linear<B>,
}

impl<B: Backend> LSTMCell<B> {
    /// Create a new LSTM cell.
    ///
    /// # Arguments
    /// * `input_size` - Size of the input features
    /// * `hidden_size` - Size of the hidden and cell states
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let input_weights = LinearConfig::new(input_size, 4 * hidden_size)
            .with_bias(true)
            .init(device);

        let recurrent_weights = LinearConfig::new(hidden_size, 4 * hidden_size)
            .with_bias(false)
            .init(device);

        Self {
            input_size,
            hidden_size,
            forget_bias: 1.0,
            input_weights,
            recurrent_weights,
        }
    }

    /// Set the forget-gate bias offset (default: 1.0).
    pub fn with_forget_bias(mut self, forget_bias: f32) -> Self {
        self.forget_bias = forget_bias;
        self
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get the forget-gate bias offset
    pub fn forget_bias(&self) -> f32 {
        self.forget_bias
    }

    /// Zero-initialized `(hidden, cell)` state for a batch.
    pub fn init_state(
        &self,
        batch_size: usize,
        device: &B::Device,
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        (
            Tensor::zeros([batch_size, self.hidden_size], device),
            Tensor::zeros([batch_size, self.hidden_size], device),
        )
    }

    /// Perform a forward pass through the LSTM cell.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `state` - Tuple of (hidden_state, cell_state), each `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state)
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        state: (Tensor<B, 2>, Tensor<B, 2>),
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let (hidden_state, cell_state) = state;

        let z = self.input_weights.forward(input)
            + self.recurrent_weights.forward(hidden_state.clone());

        // Split into the 4 gate pre-activations
        let gates = z.chunk(4, 1);
        let input_gate = activation::sigmoid(gates[0].clone());
        let forget_gate = activation::sigmoid(gates[1].clone().add_scalar(self.forget_bias));
        let candidate = gates[2].clone().tanh();
        let output_gate = activation::sigmoid(gates[3].clone());

        // c' = f * c + i * g
        let new_cell = forget_gate * cell_state + input_gate * candidate;

        // h' = o * tanh(c')
        let new_hidden = output_gate * new_cell.clone().tanh();

        (new_hidden, new_cell)
    }
}
