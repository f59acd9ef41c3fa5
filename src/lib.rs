//! # relrnn - Relational & Recurrent Building Blocks
//!
//! Relation Network and gated recurrent cells for the Burn framework.
//!
//! ## Features
//!
//! - **RelationNetwork**: reasoning over all pairs of a set of objects,
//!   optionally conditioned on a context vector (e.g. a question embedding)
//! - **LSTMCell / GRUCell**: single-timestep gated recurrent cells
//! - **LSTM / GRU**: sequence layers with batching, state management and
//!   optional output projection
//! - **Mlp**: fully-connected stacks with configurable activation and dropout,
//!   the substrate for the relation heads
//! - **Pair Masks**: restrict which object pairs contribute to the relation
//!   aggregate
//!
//! ## Quick Start
//!
//! ```rust
//! use relrnn::prelude::*;
//! use burn::backend::NdArray;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! // 8-dimensional objects, 32-dimensional relations, 4 outputs
//! let rn = RelationNetwork::<Backend>::new(8, 32, 4, &device);
//!
//! assert_eq!(rn.object_size(), 8);
//! assert_eq!(rn.output_size(), 4);
//! ```
//!
//! ## Cell-level Usage
//!
//! For direct cell access (single timestep processing):
//!
//! ```ignore
//! use relrnn::cells::GRUCell;
//!
//! let cell = GRUCell::<Backend>::new(16, 32, &device);
//! let hidden = cell.init_state(batch, &device);
//! let hidden = cell.forward(input, hidden);
//! ```

pub mod activation;
pub mod cells;
pub mod mlp;
pub mod relation;
pub mod rnn;

pub mod prelude {
    pub use crate::activation::{Activation, LeCun};
    pub use crate::cells::{GRUCell, LSTMCell};
    pub use crate::mlp::Mlp;
    pub use crate::relation::{Aggregation, RelationNetwork};
    pub use crate::rnn::{GRU, LSTM};
}
