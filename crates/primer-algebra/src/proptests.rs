//! Property-based tests for quaternion arithmetic.
//!
//! Coefficients are drawn from small integers so that every sum and product
//! below is exact in `f64` and the ring laws hold with `==`.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Quaternion, QuaternionError, Ring, StarRing};

    // Strategy for generating small integral coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-1000i32..1000i32).prop_map(f64::from)
    }

    fn quaternion() -> impl Strategy<Value = Quaternion> {
        (small_coeff(), small_coeff(), small_coeff(), small_coeff())
            .prop_map(|(a, b, c, d)| Quaternion::new(a, b, c, d).unwrap())
    }

    proptest! {
        // Additive group axioms

        #[test]
        fn add_commutative(p in quaternion(), q in quaternion()) {
            prop_assert_eq!(p.plus(&q), q.plus(&p));
        }

        #[test]
        fn add_associative(p in quaternion(), q in quaternion(), r in quaternion()) {
            prop_assert_eq!(p.plus(&q).plus(&r), p.plus(&q.plus(&r)));
        }

        #[test]
        fn add_identity(p in quaternion()) {
            prop_assert_eq!(p + Quaternion::ZERO, p);
            prop_assert_eq!(Quaternion::ZERO + p, p);
        }

        #[test]
        fn additive_inverse(p in quaternion()) {
            prop_assert!((p + -p).is_zero());
        }

        // Multiplicative monoid axioms

        #[test]
        fn mul_associative(p in quaternion(), q in quaternion(), r in quaternion()) {
            prop_assert_eq!((p * q) * r, p * (q * r));
        }

        #[test]
        fn mul_identity(p in quaternion()) {
            prop_assert_eq!(p * Quaternion::ONE, p);
            prop_assert_eq!(Quaternion::ONE * p, p);
        }

        #[test]
        fn distributive(p in quaternion(), q in quaternion(), r in quaternion()) {
            prop_assert_eq!(p * (q + r), p * q + p * r);
            prop_assert_eq!((q + r) * p, q * p + r * p);
        }

        // Conjugation

        #[test]
        fn conjugate_involution(p in quaternion()) {
            prop_assert_eq!(p.conjugate().conjugate(), p);
        }

        #[test]
        fn conjugate_reverses_products(p in quaternion(), q in quaternion()) {
            prop_assert_eq!(
                StarRing::conjugate(&(p * q)),
                StarRing::conjugate(&q) * StarRing::conjugate(&p)
            );
        }

        #[test]
        fn norm_is_real_part_of_product_with_conjugate(p in quaternion()) {
            let product = p * p.conjugate();
            prop_assert_eq!(product.coefficients(), [p.norm_squared(), 0.0, 0.0, 0.0]);
        }

        // Construction

        #[test]
        fn finite_coefficients_accepted(a in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
            prop_assert!(Quaternion::new(a, -a, a, -a).is_ok());
        }

        #[test]
        fn nan_rejected_at_any_position(index in 0usize..4, fill in small_coeff()) {
            let mut coefficients = [fill; 4];
            coefficients[index] = f64::NAN;
            let component = ['a', 'b', 'c', 'd'][index];
            prop_assert_eq!(
                Quaternion::try_from(coefficients),
                Err(QuaternionError::InvalidCoefficient { component })
            );
        }

        #[test]
        fn coefficients_round_trip(p in quaternion()) {
            prop_assert_eq!(Quaternion::try_from(p.coefficients()), Ok(p));
        }
    }
}
