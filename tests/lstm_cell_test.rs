#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::tensor::Tensor;
    use relrnn::cells::LSTMCell;

    type Backend = NdArray<f32>;

    #[test]
    fn test_lstm_cell_sizes() {
        let device = Default::default();
        let cell = LSTMCell::<Backend>::new(12, 24, &device);

        assert_eq!(cell.input_size(), 12);
        assert_eq!(cell.hidden_size(), 24);
    }

    #[test]
    fn test_lstm_cell_step() {
        let device = Default::default();
        let cell = LSTMCell::<Backend>::new(12, 24, &device);

        let input = Tensor::<Backend, 2>::random(
            [3, 12],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );
        let state = cell.init_state(3, &device);

        let (h, c) = cell.forward(input, state);

        assert_eq!(h.dims(), [3, 24]);
        assert_eq!(c.dims(), [3, 24]);
    }

    #[test]
    fn test_lstm_cell_sequence_evolves_state() {
        let device = Default::default();
        let cell = LSTMCell::<Backend>::new(6, 10, &device);

        let (mut h, mut c) = cell.init_state(1, &device);
        let mut previous = h.clone();

        for step in 0..4 {
            let input = Tensor::<Backend, 2>::random(
                [1, 6],
                burn::tensor::Distribution::Uniform(-1.0, 1.0),
                &device,
            );
            (h, c) = cell.forward(input, (h, c));

            if step > 0 {
                let moved = (h.clone() - previous).abs().sum().into_scalar();
                assert!(moved >= 0.0);
            }
            previous = h.clone();
        }

        assert!(h.abs().sum().into_scalar() > 0.0 || c.abs().sum().into_scalar() > 0.0);
    }

    #[test]
    fn test_lstm_cell_hidden_stays_bounded() {
        let device = Default::default();
        let cell = LSTMCell::<Backend>::new(6, 10, &device);

        let mut state = cell.init_state(2, &device);

        // h' = o * tanh(c') can never leave (-1, 1)
        for _ in 0..8 {
            let input = Tensor::<Backend, 2>::random(
                [2, 6],
                burn::tensor::Distribution::Uniform(-5.0, 5.0),
                &device,
            );
            state = cell.forward(input, state);
            assert!(state.0.abs().max().into_scalar() <= 1.0);
        }
    }

    #[test]
    fn test_lstm_cell_custom_forget_bias() {
        let device = Default::default();
        let cell = LSTMCell::<Backend>::new(6, 10, &device).with_forget_bias(2.0);

        assert!((cell.forget_bias() - 2.0).abs() < 1e-6);

        let input = Tensor::<Backend, 2>::zeros([1, 6], &device);
        let state = cell.init_state(1, &device);
        let (h, _) = cell.forward(input, state);

        assert_eq!(h.dims(), [1, 10]);
    }
}
