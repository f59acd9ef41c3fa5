//! GRU sequence layer.
//!
//! Wraps [`GRUCell`] with sequence iteration, batching, state management
//! and an optional output projection.

use crate::cells::GRUCell;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// GRU layer processing whole sequences.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct GRU<B: Backend> {
    /// The GRU cell for processing individual timesteps
    cell: GRUCell<B>,
    /// Optional projection layer applied to each output
    proj: Option<Linear<B>>,
    input_size: usize,
    hidden_size: usize,
    batch_first: bool,
    return_sequences: bool,
    output_size: usize,
}

impl<B: Backend> GRU<B> {
    /// Create a new GRU layer.
    ///
    /// # Arguments
    /// * `input_size` - Number of input features
    /// * `hidden_size` - Number of hidden units
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let cell = GRUCell::new(input_size, hidden_size, device);

        Self {
            cell,
            proj: None,
            input_size,
            hidden_size,
            batch_first: true,
            return_sequences: true,
            output_size: hidden_size,
        }
    }

    /// Set whether input is batch-first (default: true)
    pub fn with_batch_first(mut self, batch_first: bool) -> Self {
        self.batch_first = batch_first;
        self
    }

    /// Set whether to return full sequences (default: true)
    pub fn with_return_sequences(mut self, return_sequences: bool) -> Self {
        self.return_sequences = return_sequences;
        self
    }

    /// Project each output to `proj_size` through a trained linear layer.
    pub fn with_proj_size(mut self, proj_size: usize, device: &B::Device) -> Self {
        self.proj = Some(
            LinearConfig::new(self.hidden_size, proj_size)
                .with_bias(true)
                .init(device),
        );
        self.output_size = proj_size;
        self
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get output size (considering projection)
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Forward pass over a sequence.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape:
    ///   - `[batch, seq, features]` if batch_first=true
    ///   - `[seq, batch, features]` if batch_first=false
    /// * `state` - Optional initial hidden state of shape `[batch, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (output, final_state) where:
    /// - output: `[batch, seq, output_size]`, or `[batch, 1, output_size]`
    ///   when `return_sequences` is off
    /// - final_state: `[batch, hidden_size]`
    pub fn forward(
        &self,
        input: Tensor<B, 3>,
        state: Option<Tensor<B, 2>>,
    ) -> (Tensor<B, 3>, Tensor<B, 2>) {
        let device = input.device();

        let dims = input.dims();
        let (batch_size, seq_len) = if self.batch_first {
            (dims[0], dims[1])
        } else {
            (dims[1], dims[0])
        };

        let mut current_state =
            state.unwrap_or_else(|| self.cell.init_state(batch_size, &device));

        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            let step_input = if self.batch_first {
                input.clone().narrow(1, t, 1).squeeze(1)
            } else {
                input.clone().narrow(0, t, 1).squeeze(0)
            };

            current_state = self.cell.forward(step_input, current_state);
            let mut output = current_state.clone();

            if let Some(ref proj) = self.proj {
                output = proj.forward(output);
            }

            if self.return_sequences || t == seq_len - 1 {
                outputs.push(output);
            }
        }

        let output = Tensor::stack(outputs, 1);
        (output, current_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_gru_layer_creation() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(20, 50, &device);

        assert_eq!(gru.input_size(), 20);
        assert_eq!(gru.hidden_size(), 50);
        assert_eq!(gru.output_size(), 50);
    }

    #[test]
    fn test_gru_layer_forward() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(20, 50, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 20], &device);
        let (output, state) = gru.forward(input, None);

        assert_eq!(output.dims(), [4, 10, 50]);
        assert_eq!(state.dims(), [4, 50]);
    }

    #[test]
    fn test_gru_layer_projection() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(20, 50, &device).with_proj_size(10, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 20], &device);
        let (output, state) = gru.forward(input, None);

        assert_eq!(output.dims(), [4, 10, 10]);
        // Projection changes outputs, not the recurrent state
        assert_eq!(state.dims(), [4, 50]);
    }

    #[test]
    fn test_gru_layer_return_last_only() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(20, 50, &device).with_return_sequences(false);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 20], &device);
        let (output, state) = gru.forward(input, None);

        assert_eq!(output.dims(), [4, 1, 50]);
        assert_eq!(state.dims(), [4, 50]);
    }

    #[test]
    fn test_gru_layer_seq_first() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(20, 50, &device).with_batch_first(false);

        // [seq, batch, features]
        let input = Tensor::<TestBackend, 3>::zeros([10, 4, 20], &device);
        let (output, state) = gru.forward(input, None);

        assert_eq!(output.dims(), [4, 10, 50]);
        assert_eq!(state.dims(), [4, 50]);
    }

    #[test]
    fn test_gru_layer_last_output_matches_state() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(8, 16, &device);

        let input = Tensor::<TestBackend, 3>::random(
            [2, 6, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let (output, state) = gru.forward(input, None);

        // Without projection, the last output step is the final state
        let last = output.narrow(1, 5, 1).squeeze(1);
        let diff = (last - state).abs().max().into_scalar();
        assert!(diff < 1e-6);
    }

    #[test]
    fn test_gru_layer_state_threading() {
        let device = Default::default();
        let gru = GRU::<TestBackend>::new(8, 16, &device);

        let chunk1 = Tensor::<TestBackend, 3>::random(
            [1, 5, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        let chunk2 = Tensor::<TestBackend, 3>::random(
            [1, 5, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let (_, state) = gru.forward(chunk1, None);
        let (output, _) = gru.forward(chunk2, Some(state));

        assert_eq!(output.dims(), [1, 5, 16]);
    }
}
