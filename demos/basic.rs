//! Basic usage of the single-timestep cells.
//!
//! This example demonstrates how to drive LSTM and GRU cells manually,
//! one input frame at a time.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use relrnn::cells::{GRUCell, LSTMCell};

fn main() {
    println!("=== relrnn Cell Example ===\n");

    // Use the NdArray backend (CPU)
    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: GRU cell, step by step
    println!("Example 1: GRU cell");
    let gru = GRUCell::<Backend>::new(8, 16, &device);

    println!("Created GRU cell:");
    println!("  Input size: {}", gru.input_size());
    println!("  Hidden size: {}", gru.hidden_size());
    println!();

    let mut hidden = gru.init_state(2, &device);
    for step in 0..3 {
        let frame = Tensor::<Backend, 2>::random(
            [2, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        hidden = gru.forward(frame, hidden);
        println!("  Step {}: hidden shape {:?}", step, hidden.dims());
    }
    println!();

    // Example 2: LSTM cell with its separate memory state
    println!("Example 2: LSTM cell");
    let lstm = LSTMCell::<Backend>::new(8, 16, &device);

    let mut state = lstm.init_state(2, &device);
    for step in 0..3 {
        let frame = Tensor::<Backend, 2>::random(
            [2, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        state = lstm.forward(frame, state);
        println!(
            "  Step {}: hidden {:?}, cell {:?}",
            step,
            state.0.dims(),
            state.1.dims()
        );
    }
    println!();

    // Example 3: tuning the forget gate
    println!("Example 3: Forget-gate bias");
    let cautious = LSTMCell::<Backend>::new(8, 16, &device).with_forget_bias(0.0);
    println!("  Default cell starts remembering (bias 1.0)");
    println!("  This cell starts neutral (bias {})", cautious.forget_bias());
    println!();

    println!("=== Examples completed successfully! ===");
}
