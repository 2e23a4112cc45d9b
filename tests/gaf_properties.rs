//! Structural properties of GASF/GADF fields on random batches

use approx::assert_abs_diff_eq;
use gaf_encoding::{GafEncoder, GafError, GafMethod};
use ndarray::{array, aview1, s, Array2, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_batch(rng: &mut StdRng, batch: usize, channels: usize, seq_len: usize) -> Array3<f64> {
    Array3::from_shape_fn((batch, channels, seq_len), |_| rng.gen_range(-1000.0..1000.0))
}

#[test]
fn test_output_range_and_shape() {
    let mut rng = StdRng::seed_from_u64(42);

    for encoder in [GafEncoder::gasf(), GafEncoder::gadf()] {
        for _ in 0..10 {
            let batch = rng.gen_range(1..4);
            let channels = rng.gen_range(1..4);
            let seq_len = rng.gen_range(1..40);
            let x = random_batch(&mut rng, batch, channels, seq_len);

            let gaf = encoder.encode(&x).unwrap();
            assert_eq!(gaf.dim(), (batch, channels, seq_len, seq_len));

            for &v in gaf.iter() {
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v), "value {} outside [0, 1]", v);
            }
        }
    }
}

#[test]
fn test_summation_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    let x = random_batch(&mut rng, 2, 3, 25);
    let gaf = GafEncoder::gasf().encode(&x).unwrap();

    for b in 0..2 {
        for c in 0..3 {
            let field = gaf.slice(s![b, c, .., ..]);
            for ((i, j), &v) in field.indexed_iter() {
                assert_abs_diff_eq!(v, field[[j, i]], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_difference_is_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    let x = random_batch(&mut rng, 2, 2, 30);
    let gaf = GafEncoder::gadf().encode(&x).unwrap();

    for b in 0..2 {
        for c in 0..2 {
            let field = gaf.slice(s![b, c, .., ..]);
            for ((i, j), &v) in field.indexed_iter() {
                assert_abs_diff_eq!(v - 0.5, -(field[[j, i]] - 0.5), epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    let x = random_batch(&mut rng, 3, 2, 20);

    for encoder in [GafEncoder::gasf(), GafEncoder::gadf()] {
        let first = encoder.encode(&x).unwrap();
        let second = encoder.encode(&x).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_batch_channel_independence() {
    let encoder = GafEncoder::gasf();
    let first = [3.0, -1.0, 4.0, 1.0, -5.0, 9.0];
    let second = [100.0, 100.5, 99.0, 101.0, 102.5, 98.0];

    let mut stacked = Array3::<f64>::zeros((2, 1, 6));
    stacked.slice_mut(s![0, 0, ..]).assign(&aview1(&first));
    stacked.slice_mut(s![1, 0, ..]).assign(&aview1(&second));
    let gaf = encoder.encode(&stacked).unwrap();

    let expected: [Array2<f64>; 2] = [encoder.encode_series(&first), encoder.encode_series(&second)];
    assert_eq!(gaf.slice(s![0, 0, .., ..]), expected[0]);
    assert_eq!(gaf.slice(s![1, 0, .., ..]), expected[1]);

    // Same sequences laid out as channels of one batch element
    let channels = stacked.clone().into_shape((1, 2, 6)).unwrap();
    let gaf_channels = encoder.encode(&channels).unwrap();
    assert_eq!(gaf_channels.slice(s![0, 1, .., ..]), expected[1]);
}

#[test]
fn test_constant_sequence_is_finite() {
    let x: Array3<f64> = array![[[5.0, 5.0, 5.0, 5.0]], [[-2.0, -2.0, -2.0, -2.0]]];

    for method in [GafMethod::Summation, GafMethod::Difference] {
        let gaf = GafEncoder::new(method, 1e-6).encode(&x).unwrap();
        assert!(gaf.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_extreme_finite_values_stay_in_range() {
    let x: Array3<f64> = array![[[-1e308, 0.0, 1e308]], [[f64::MIN, 1.0, f64::MAX]]];

    for encoder in [GafEncoder::gasf(), GafEncoder::gadf()] {
        for gaf in [encoder.encode(&x).unwrap(), encoder.encode_parallel(&x).unwrap()] {
            for &v in gaf.iter() {
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v), "value {} outside [0, 1]", v);
            }
        }
    }

    // x_cos = [-1, 0, 1] gives φ = [π, π/2, 0]
    let gasf = GafEncoder::gasf().encode(&x).unwrap();
    assert_abs_diff_eq!(gasf[[0, 0, 0, 2]], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(gasf[[0, 0, 2, 2]], 1.0, epsilon = 1e-6);
}

#[test]
fn test_nan_fills_its_whole_field() {
    let x: Array3<f64> = array![[[1.0, f64::NAN, 2.0, 3.0], [1.0, 2.0, 3.0, 4.0]]];

    for encoder in [GafEncoder::gasf(), GafEncoder::gadf()] {
        let gaf = encoder.encode(&x).unwrap();

        assert!(gaf.slice(s![0, 0, .., ..]).iter().all(|v| v.is_nan()));
        assert!(gaf.slice(s![0, 1, .., ..]).iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_example_scenario() {
    let encoder = GafEncoder::from_method_name("summation", 1e-6).unwrap();
    let x: Array3<f64> = array![[[1.0, 2.0, 3.0]]];
    let gaf = encoder.encode(&x).unwrap();
    let field: ndarray::ArrayView2<f64> = gaf.slice(s![0, 0, .., ..]);

    for ((i, j), &v) in field.indexed_iter() {
        assert_eq!(v, field[[j, i]]);
    }
    assert_abs_diff_eq!(field[[0, 2]], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(field[[0, 0]], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(field[[1, 1]], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(field[[2, 2]], 1.0, epsilon = 1e-3);
}

#[test]
fn test_parallel_matches_serial_on_random_batch() {
    let mut rng = StdRng::seed_from_u64(99);
    let x = random_batch(&mut rng, 5, 3, 33);

    for encoder in [GafEncoder::gasf(), GafEncoder::gadf()] {
        assert_eq!(encoder.encode(&x).unwrap(), encoder.encode_parallel(&x).unwrap());
    }
}

#[test]
fn test_errors() {
    assert!(matches!(
        GafEncoder::from_method_name("markov", 1e-6),
        Err(GafError::InvalidConfiguration(_))
    ));

    let matrix = Array2::<f64>::zeros((3, 3));
    assert!(matches!(
        GafEncoder::gasf().encode(&matrix),
        Err(GafError::ShapeError { expected: 3, got: 2 })
    ));
    assert!(matches!(
        GafEncoder::gadf().encode_parallel(&matrix),
        Err(GafError::ShapeError { expected: 3, got: 2 })
    ));
}
