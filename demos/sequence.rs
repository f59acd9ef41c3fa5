//! Sequence processing with the LSTM and GRU layers.
//!
//! Demonstrates batching, last-step mode, output projection and carrying
//! state across calls.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use relrnn::rnn::{GRU, LSTM};

fn main() {
    println!("=== relrnn Sequence Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: full output sequences
    println!("Example 1: Batch-first sequences");
    let lstm = LSTM::<Backend>::new(20, 50, &device);

    // Input shape: [batch=4, seq=10, features=20]
    let input = Tensor::<Backend, 3>::random(
        [4, 10, 20],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );

    let (output, (hidden, cell)) = lstm.forward(input, None);

    println!("  Input shape:  [4, 10, 20]");
    println!("  Output shape: {:?}", output.dims());
    println!("  Hidden shape: {:?}", hidden.dims());
    println!("  Cell shape:   {:?}", cell.dims());
    println!();

    // Example 2: last timestep only, projected to a small readout
    println!("Example 2: Sequence classification head");
    let gru = GRU::<Backend>::new(20, 32, &device)
        .with_return_sequences(false)
        .with_proj_size(5, &device);

    let (logits, _) = gru.forward(
        Tensor::<Backend, 3>::random(
            [4, 10, 20],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        ),
        None,
    );

    println!("  Input shape:  [4, 10, 20]");
    println!("  Output shape: {:?}", logits.dims());
    println!("  Only the last timestep is returned, projected to 5 classes");
    println!();

    // Example 3: state persistence across calls
    println!("Example 3: Stateful processing");
    let gru_stateful = GRU::<Backend>::new(8, 16, &device);

    let (_, state) = gru_stateful.forward(
        Tensor::<Backend, 3>::random(
            [1, 5, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        ),
        None,
    );

    let (_, state) = gru_stateful.forward(
        Tensor::<Backend, 3>::random(
            [1, 5, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        ),
        Some(state),
    );

    println!("  Batch 1 processed, state carried over");
    println!("  Batch 2 processed with previous state");
    println!("  Final state shape: {:?}", state.dims());
    println!();

    println!("=== Examples completed successfully! ===");
}
