#[cfg(test)]
mod property_tests {
    use featvis::labels::make_arg_str;
    use featvis::objectives::{dot_cossim, extract_act_pos};
    use ndarray::{Array1, Array4};
    use proptest::prelude::*;

    // Strategy for generating equal-length vector pairs
    fn vector_pair_strategy() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
        (1usize..=32).prop_flat_map(|len| {
            (
                prop::collection::vec(-10.0f32..10.0, len),
                prop::collection::vec(-10.0f32..10.0, len),
            )
        })
    }

    proptest! {
        #[test]
        fn test_weighting_never_grows_the_dot(
            (x, y) in vector_pair_strategy(),
            pow in 0.0f32..4.0
        ) {
            let x = Array1::from_vec(x);
            let y = Array1::from_vec(y);
            let dot = x.dot(&y);
            let weighted = dot_cossim(x.view(), y.view(), pow).unwrap();

            prop_assert!(weighted.is_finite());
            prop_assert!(weighted.abs() <= dot.abs() * 1.0001 + 1e-4);
            // the floor keeps the sign of the dot product
            prop_assert!(weighted * dot >= 0.0);
        }

        #[test]
        fn test_zero_pow_is_plain_dot((x, y) in vector_pair_strategy()) {
            let x = Array1::from_vec(x);
            let y = Array1::from_vec(y);
            let weighted = dot_cossim(x.view(), y.view(), 0.0).unwrap();
            prop_assert_eq!(weighted, x.dot(&y));
        }

        #[test]
        fn test_label_is_short_or_ellipsis(s in ".{0,40}") {
            let label = make_arg_str(s.as_str());
            prop_assert!(label == "..." || label == s);
            prop_assert!(label.chars().count() <= 15);
            prop_assert!(!label.contains('\n'));
        }

        #[test]
        fn test_extracted_position_shape(
            batch in 1usize..4,
            channels in 1usize..8,
            height in 1usize..9,
            width in 1usize..9
        ) {
            let acts = Array4::<f32>::zeros((batch, channels, height, width));
            let pos = extract_act_pos(acts.view(), None, None).unwrap();
            prop_assert_eq!(pos.shape(), &[batch, channels, 1, 1]);
        }
    }
}
