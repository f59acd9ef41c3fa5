//! # Recurrent Layers for Sequence Processing
//!
//! Complete recurrent layers that handle sequence iteration, batching, and
//! hidden state management around the cells in [`crate::cells`].
//! **These are the primary APIs most users should use.**
//!
//! ## Available Layers
//!
//! | Layer | State | Description |
//! |-------|-------|-------------|
//! | [`LSTM`] | hidden + cell | Gated memory, strong on long dependencies |
//! | [`GRU`] | hidden | Fewer parameters, often trains faster |
//!
//! ## Tensor Shapes
//!
//! ### Input Tensor (3D)
//!
//! | Format | Shape | Default |
//! |--------|-------|---------|
//! | Batch-first | `[batch, seq_len, features]` | Yes |
//! | Sequence-first | `[seq_len, batch, features]` | No |
//!
//! Use `.with_batch_first(false)` to switch to sequence-first input. The
//! output is batch-first either way.
//!
//! ### Output Tensor
//!
//! | Setting | Shape | Description |
//! |---------|-------|-------------|
//! | `return_sequences=true` (default) | `[batch, seq_len, output_size]` | All timesteps |
//! | `return_sequences=false` | `[batch, 1, output_size]` | Last timestep only |
//!
//! ## Common Patterns
//!
//! ### Sequence Classification (last output only)
//!
//! ```ignore
//! let gru = GRU::<Backend>::new(input_size, hidden_size, &device)
//!     .with_return_sequences(false);
//!
//! let (output, _) = gru.forward(input, None);
//! // output: [batch, 1, hidden_size]
//! ```
//!
//! ### Stateful Processing (preserve hidden state)
//!
//! ```ignore
//! let lstm = LSTM::<Backend>::new(input_size, hidden_size, &device);
//!
//! let (out1, state) = lstm.forward(batch1, None);
//! let (out2, state) = lstm.forward(batch2, Some(state));
//! // State persists across batches
//! ```
//!
//! ### Projected Outputs
//!
//! ```ignore
//! let lstm = LSTM::<Backend>::new(input_size, hidden_size, &device)
//!     .with_proj_size(output_size);
//!
//! let (output, _) = lstm.forward(input, None);
//! // output: [batch, seq_len, output_size]
//! ```

pub mod gru;
pub mod lstm;

pub use gru::GRU;
pub use lstm::LSTM;
