//! Relational reasoning over a set of objects.
//!
//! Demonstrates the Relation Network: all-pairs reasoning, conditioning on
//! a context vector, and restricting pairs with a mask.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use ndarray::Array2;
use relrnn::relation::{Aggregation, RelationNetwork};

fn main() {
    println!("=== relrnn Relation Network Example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: plain all-pairs reasoning
    println!("Example 1: All pairs");
    let rn = RelationNetwork::<Backend>::new(8, 32, 4, &device);

    println!("Created Relation Network:");
    println!("  Object size:   {}", rn.object_size());
    println!("  Relation size: {}", rn.relation_size());
    println!("  Output size:   {}", rn.output_size());
    println!();

    // A scene of 6 objects with 8 features each
    let objects = Tensor::<Backend, 3>::random(
        [2, 6, 8],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );

    let answer = rn.forward(objects, None);

    println!("  Objects shape: [2, 6, 8]  (36 ordered pairs each)");
    println!("  Output shape:  {:?}", answer.dims());
    println!();

    // Example 2: conditioning pairs on a question embedding
    println!("Example 2: Question-conditioned relations");
    let rn_vqa = RelationNetwork::<Backend>::new(8, 64, 10, &device)
        .with_context_size(16)
        .with_dropout(0.5);

    let scene = Tensor::<Backend, 3>::random(
        [2, 6, 8],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );
    let question = Tensor::<Backend, 2>::random(
        [2, 16],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );

    let logits = rn_vqa.forward(scene, Some(question));

    println!("  Every pair sees the question embedding");
    println!("  Output shape: {:?}", logits.dims());
    println!();

    // Example 3: masking pairs
    println!("Example 3: Pair mask");

    // Only relate distinct objects: zero the diagonal
    let mut mask = Array2::from_elem((6, 6), 1.0f32);
    for i in 0..6 {
        mask[[i, i]] = 0.0;
    }

    let rn_masked = RelationNetwork::<Backend>::new(8, 32, 4, &device)
        .with_pair_mask(mask, &device)
        .with_aggregation(Aggregation::Mean);

    let output = rn_masked.forward(
        Tensor::<Backend, 3>::random(
            [2, 6, 8],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        ),
        None,
    );

    println!("  Self-pairs excluded, mean over the 30 remaining pairs");
    println!("  Output shape: {:?}", output.dims());
    println!();

    println!("=== Examples completed successfully! ===");
}
