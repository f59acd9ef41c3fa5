//! # Gated Recurrent Cells
//!
//! Single-timestep recurrent cells. Each cell consumes one input frame and
//! the previous state and produces the next state. The higher-level layers
//! in [`crate::rnn`] wrap these cells for sequence processing.
//!
//! ## Cell Types
//!
//! | Cell | State | Description |
//! |------|-------|-------------|
//! | [`LSTMCell`] | hidden + cell | Input/forget/output gates over a separate memory |
//! | [`GRUCell`] | hidden | Reset/update gates over a single state |
//!
//! ## When to Use Cells Directly
//!
//! Most users should use the [`LSTM`](crate::rnn::LSTM) or
//! [`GRU`](crate::rnn::GRU) layers which handle sequence processing
//! automatically. Use cells directly when you need:
//!
//! - Custom sequence processing logic
//! - Integration with other frameworks
//! - Fine-grained control over state management
//!
//! ## Tensor Shapes
//!
//! All cells expect 2D tensors for single-timestep processing:
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features |
//! | `hidden_state` | `[batch, hidden_size]` | Previous hidden state |
//! | `cell_state` | `[batch, hidden_size]` | Previous memory (LSTM only) |
//! | `new_state` | `[batch, hidden_size]` | Updated state |
//!
//! ## Example: Using GRUCell Directly
//!
//! ```ignore
//! use relrnn::cells::GRUCell;
//!
//! let cell = GRUCell::<Backend>::new(16, 32, &device);
//!
//! let mut hidden = cell.init_state(batch, &device);
//! for frame in frames {
//!     hidden = cell.forward(frame, hidden);
//! }
//! ```

pub mod gru_cell;
pub mod lstm_cell;

pub use gru_cell::GRUCell;
pub use lstm_cell::LSTMCell;
