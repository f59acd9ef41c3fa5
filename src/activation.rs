//! Activation functions for the relation and recurrent modules.
//!
//! Gate nonlinearities (sigmoid, tanh) come straight from Burn. This module
//! adds the saturating LeCun tanh and a small selector enum used by the
//! [`Mlp`](crate::mlp::Mlp) stacks.

use burn::tensor::{activation, backend::Backend, Tensor};
use serde::{Deserialize, Serialize};

/// LeCun's tanh activation function.
///
/// This activation function is defined as:
/// `f(x) = 1.7159 * tanh(0.666 * x)`
///
/// The scaling factors (1.7159 and 0.666) are chosen such that:
/// - The function approximates the identity near the origin
/// - The output range is approximately [-1.7159, 1.7159]
///
/// # Example
///
/// ```rust
/// use burn::backend::NdArray;
/// use burn::tensor::Tensor;
/// use relrnn::activation::LeCun;
///
/// type Backend = NdArray<f32>;
/// let device = Default::default();
///
/// let x = Tensor::<Backend, 1>::from_floats([0.0, 1.0, -1.0], &device);
/// let y = LeCun::forward(x);
/// ```
pub struct LeCun;

impl LeCun {
    /// Applies the LeCun tanh activation function element-wise.
    pub fn forward<B: Backend, const D: usize>(x: Tensor<B, D>) -> Tensor<B, D> {
        let scaled = x * 0.666f32;
        scaled.tanh() * 1.7159f32
    }
}

/// Applies LeCun activation to a tensor.
///
/// Convenience trait extension for applying LeCun activation directly on tensors.
pub trait LeCunActivation {
    /// Applies LeCun activation
    fn lecun(self) -> Self;
}

impl<B: Backend, const D: usize> LeCunActivation for Tensor<B, D> {
    fn lecun(self) -> Self {
        LeCun::forward(self)
    }
}

/// Activation applied between the fully-connected layers of an [`Mlp`](crate::mlp::Mlp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activation {
    /// Rectified linear unit (default)
    #[default]
    Relu,
    /// Hyperbolic tangent
    Tanh,
    /// Gaussian error linear unit
    Gelu,
    /// Sigmoid-weighted linear unit
    Silu,
    /// LeCun's scaled tanh, see [`LeCun`]
    LeCunTanh,
}

impl Activation {
    /// Applies the activation element-wise.
    pub fn forward<B: Backend, const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Relu => activation::relu(x),
            Activation::Tanh => x.tanh(),
            Activation::Gelu => activation::gelu(x),
            Activation::Silu => activation::silu(x),
            Activation::LeCunTanh => LeCun::forward(x),
        }
    }

    /// Resolve an activation from its lowercase name.
    ///
    /// Panics on unknown names, listing the valid options.
    pub fn from_name(name: &str) -> Self {
        match name {
            "relu" => Activation::Relu,
            "tanh" => Activation::Tanh,
            "gelu" => Activation::Gelu,
            "silu" => Activation::Silu,
            "lecun_tanh" => Activation::LeCunTanh,
            _ => panic!(
                "Unknown activation: {}. Valid options are {:?}",
                name,
                ["relu", "tanh", "gelu", "silu", "lecun_tanh"]
            ),
        }
    }

    /// Stable index used to store the selector inside a Burn module.
    pub(crate) fn index(&self) -> usize {
        match self {
            Activation::Relu => 0,
            Activation::Tanh => 1,
            Activation::Gelu => 2,
            Activation::Silu => 3,
            Activation::LeCunTanh => 4,
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        match index {
            1 => Activation::Tanh,
            2 => Activation::Gelu,
            3 => Activation::Silu,
            4 => Activation::LeCunTanh,
            _ => Activation::Relu,
        }
    }
}
