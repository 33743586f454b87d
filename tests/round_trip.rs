use fourier_engine::{Direction, Plan};
use num_complex::Complex;
use proptest::prelude::*;

fn samples(max_size: usize) -> impl Strategy<Value = Vec<Complex<f64>>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..=max_size)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex::new(re, im)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn inverse_of_forward_is_scaled_input(input in samples(300)) {
        let size = input.len();
        let forward = Plan::new(size, Direction::Forward).unwrap();
        let inverse = Plan::new(size, Direction::Inverse).unwrap();
        let restored = inverse.execute(&forward.execute(&input).unwrap()).unwrap();
        let scale = size as f64;
        let magnitude = input.iter().map(|x| x.norm()).fold(1.0, f64::max);
        for (r, x) in restored.iter().zip(&input) {
            prop_assert!(
                (r - x * scale).norm() <= 1e-11 * scale * magnitude,
                "size {}: {} != {}", size, r, x * scale
            );
        }
    }

    #[test]
    fn aliased_matches_allocating(input in samples(200), inverse in any::<bool>()) {
        let plan = Plan::new(input.len(), Direction::from_inverse(inverse)).unwrap();
        let mut buffer = input.clone();
        plan.execute_aliased(&mut buffer).unwrap();
        prop_assert_eq!(buffer, plan.execute(&input).unwrap());
    }

    #[test]
    fn linearity(
        pair in (1usize..=120).prop_flat_map(|size| (
            prop::collection::vec(-10f64..10., size * 2),
            prop::collection::vec(-10f64..10., size * 2),
        )),
    ) {
        let (a, b) = pair;
        let a = fourier_engine::interleaved::to_complex(&a).unwrap();
        let b = fourier_engine::interleaved::to_complex(&b).unwrap();
        let plan = Plan::new(a.len(), Direction::Forward).unwrap();
        let sum = a.iter().zip(&b).map(|(x, y)| x + y).collect::<Vec<_>>();
        let fa = plan.execute(&a).unwrap();
        let fb = plan.execute(&b).unwrap();
        let fsum = plan.execute(&sum).unwrap();
        for ((x, y), s) in fa.iter().zip(&fb).zip(&fsum) {
            prop_assert!((x + y - s).norm() < 1e-9);
        }
    }
}
