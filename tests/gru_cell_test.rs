#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::tensor::Tensor;
    use relrnn::cells::GRUCell;

    type Backend = NdArray<f32>;

    #[test]
    fn test_gru_cell_sizes() {
        let device = Default::default();
        let cell = GRUCell::<Backend>::new(12, 24, &device);

        assert_eq!(cell.input_size(), 12);
        assert_eq!(cell.hidden_size(), 24);
    }

    #[test]
    fn test_gru_cell_step() {
        let device = Default::default();
        let cell = GRUCell::<Backend>::new(12, 24, &device);

        let input = Tensor::<Backend, 2>::random(
            [3, 12],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        let hidden = cell.init_state(3, &device);

        let new_hidden = cell.forward(input, hidden);

        assert_eq!(new_hidden.dims(), [3, 24]);
    }

    #[test]
    fn test_gru_cell_state_bounded_over_sequence() {
        let device = Default::default();
        let cell = GRUCell::<Backend>::new(6, 10, &device);

        let mut hidden = cell.init_state(2, &device);

        // Starting from zero, the convex blend with a tanh candidate keeps
        // the state inside (-1, 1) forever
        for _ in 0..10 {
            let input = Tensor::<Backend, 2>::random(
                [2, 6],
                burn::tensor::Distribution::Uniform(-5.0, 5.0),
                &device,
            );
            hidden = cell.forward(input, hidden);
            assert!(hidden.abs().max().into_scalar() <= 1.0);
        }
    }

    #[test]
    fn test_gru_cell_contracts_large_state() {
        let device = Default::default();
        let cell = GRUCell::<Backend>::new(6, 10, &device);

        let input = Tensor::<Backend, 2>::zeros([1, 6], &device);
        let hidden = Tensor::<Backend, 2>::ones([1, 10], &device) * 8.0;

        let new_hidden = cell.forward(input, hidden);

        assert!(new_hidden.abs().max().into_scalar() <= 8.0 + 1e-5);
    }

    #[test]
    fn test_gru_cell_responds_to_input() {
        let device = Default::default();
        let cell = GRUCell::<Backend>::new(6, 10, &device);

        let hidden = cell.init_state(1, &device);
        let a = Tensor::<Backend, 2>::ones([1, 6], &device);
        let b = Tensor::<Backend, 2>::ones([1, 6], &device) * -1.0;

        let out_a = cell.forward(a, hidden.clone());
        let out_b = cell.forward(b, hidden);

        let diff = (out_a - out_b).abs().mean().into_scalar();
        assert!(diff > 0.0, "Different inputs should produce different states");
    }
}
