//! Gated Recurrent Unit cell.
//!
//! Reference: Cho et al., "Learning phrase representations using RNN
//! encoder-decoder for statistical machine translation", EMNLP 2014.

use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Single-timestep GRU cell.
///
/// Maintains one hidden state, updated via reset/update gates:
///
/// - `r = sigmoid(x_r + h_r)`
/// - `u = sigmoid(x_u + h_u)`
/// - `n = tanh(x_n + r * h_n)`
/// - `h' = u * h + (1 - u) * n`
///
/// `x_*` come from a fused `3 * hidden` input transformation (with bias),
/// `h_*` from a fused `3 * hidden` recurrent transformation (no bias). The
/// reset gate scales the recurrent contribution of the candidate before the
/// tanh, so the contributions cannot be summed up front as in the LSTM.
#[derive(Module, Debug)]
pub struct GRUCell<B: Backend> {
    input_size: usize,
    hidden_size: usize,
    /// Maps input to the 3 fused gate pre-activations (with bias)
    input_weights: Linear<B>,
    /// Maps hidden state to the 3 fused gate pre-activations (no bias)
    recurrent_weights: Linear<B>,
}

impl<B: Backend> GRUCell<B> {
    /// Create a new GRU cell.
    ///
    /// # Arguments
    /// * `input_size` - Size of the input features
    /// * `hidden_size` - Size of the hidden state
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let input_weights = LinearConfig::new(input_size, 3 * hidden_size)
            .with_bias(true)
            .init(device);

        let recurrent_weights = LinearConfig::new(hidden_size, 3 * hidden_size)
            .with_bias(false)
            .init(device);

        Self {
            input_size,
            hidden_size,
            input_weights,
            recurrent_weights,
        }
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Zero-initialized hidden state for a batch.
    pub fn init_state(&self, batch_size: usize, device: &B::Device) -> Tensor<B, 2> {
        Tensor::zeros([batch_size, self.hidden_size], device)
    }

    /// Perform a forward pass through the GRU cell.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `hidden` - Previous hidden state of shape `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// New hidden state of shape `[batch_size, hidden_size]`
    pub fn forward(&self, input: Tensor<B, 2>, hidden: Tensor<B, 2>) -> Tensor<B, 2> {
        let input_parts = self.input_weights.forward(input).chunk(3, 1);
        let recurrent_parts = self
            .recurrent_weights
            .forward(hidden.clone())
            .chunk(3, 1);

        let reset_gate =
            activation::sigmoid(input_parts[0].clone() + recurrent_parts[0].clone());
        let update_gate =
            activation::sigmoid(input_parts[1].clone() + recurrent_parts[1].clone());

        // n = tanh(x_n + r * h_n)
        let candidate = (input_parts[2].clone() + reset_gate * recurrent_parts[2].clone()).tanh();

        // h' = u * h + (1 - u) * n
        let keep = update_gate.clone();
        let blend = keep.ones_like() - update_gate;
        keep * hidden + blend * candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_gru_cell_creation() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(20, 50, &device);

        assert_eq!(cell.input_size(), 20);
        assert_eq!(cell.hidden_size(), 50);
    }

    #[test]
    fn test_gru_forward_shapes() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(20, 50, &device);

        let batch_size = 4;
        let input = Tensor::<TestBackend, 2>::zeros([batch_size, 20], &device);
        let hidden = cell.init_state(batch_size, &device);

        let new_hidden = cell.forward(input, hidden);

        assert_eq!(new_hidden.dims(), [batch_size, 50]);
    }

    #[test]
    fn test_gru_bounded_from_zero_state() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(10, 20, &device);

        let input = Tensor::<TestBackend, 2>::random(
            [2, 10],
            burn::tensor::Distribution::Uniform(-10.0, 10.0),
            &device,
        );
        let hidden = cell.init_state(2, &device);

        let new_hidden = cell.forward(input, hidden);

        // h' blends the zero state with a tanh-bounded candidate
        assert!(new_hidden.abs().max().into_scalar() <= 1.0);
    }

    #[test]
    fn test_gru_convex_blend_bound() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(10, 20, &device);

        let input = Tensor::<TestBackend, 2>::random(
            [2, 10],
            burn::tensor::Distribution::Uniform(-10.0, 10.0),
            &device,
        );
        let hidden = Tensor::<TestBackend, 2>::ones([2, 20], &device) * 5.0;

        let new_hidden = cell.forward(input, hidden);

        // h' = u * h + (1 - u) * n can never leave max(|h|, 1)
        assert!(new_hidden.abs().max().into_scalar() <= 5.0 + 1e-5);
    }

    #[test]
    fn test_gru_state_persistence() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(10, 20, &device);

        let mut hidden = cell.init_state(1, &device);

        for _ in 0..3 {
            let input = Tensor::<TestBackend, 2>::random(
                [1, 10],
                burn::tensor::Distribution::Uniform(0.0, 1.0),
                &device,
            );
            hidden = cell.forward(input, hidden);
        }

        let sum = hidden.abs().sum().into_scalar();
        assert!(sum != 0.0, "State should have changed after processing sequence");
    }

    #[test]
    fn test_gru_batch_sizes() {
        let device = Default::default();
        let cell = GRUCell::<TestBackend>::new(20, 50, &device);

        for batch_size in [1, 4, 16, 32] {
            let input = Tensor::<TestBackend, 2>::zeros([batch_size, 20], &device);
            let hidden = cell.init_state(batch_size, &device);

            let new_hidden = cell.forward(input, hidden);

            assert_eq!(new_hidden.dims(), [batch_size, 50]);
        }
    }
}
