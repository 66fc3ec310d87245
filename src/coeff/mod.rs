//! Coefficient algebras
//!
//! A sparse tensor stores values of an arbitrary ring/field-like type. The
//! kernel never inspects that type directly: all coefficient-level work goes
//! through the [`Coefficient`] capability interface, so any caller-chosen
//! algebra plugs in by implementing the trait.
//!
//! Shipped implementations:
//!
//! - signed integers (`i8` through `i128`, `isize`): checked arithmetic,
//!   floored division semantics (the remainder takes the divisor's sign)
//! - floats (`f32`, `f64`): infallible field arithmetic with IEEE results,
//!   floored `floor_div`/`rem`
//! - [`Complex64`]/[`Complex128`]: complex field arithmetic with a
//!   non-trivial [`Coefficient::conjugate`]

mod complex;

pub use complex::{Complex128, Complex64};

use crate::error::{Error, Result};
use num_traits::Float;

/// Capability interface for coefficient types
///
/// Each method is the coefficient-level counterpart of one tensor
/// operation. All arithmetic is fallible: integer overflow and division by
/// the additive identity surface as [`Error`]s and abort the enclosing
/// tensor operation.
///
/// # Conjugation
///
/// `conjugate` has a default body returning `self`, so a type with no
/// conjugation semantics (reals, integers) gets identity behavior without
/// declaring anything. Types with a genuine conjugate ([`Complex64`])
/// override it.
pub trait Coefficient: Clone {
    /// Unary identity, `+self`
    fn pos(self) -> Result<Self> {
        Ok(self)
    }

    /// Unary negation, `-self`
    fn neg(self) -> Result<Self>;

    /// Addition
    fn add(self, rhs: Self) -> Result<Self>;

    /// Subtraction
    fn sub(self, rhs: Self) -> Result<Self>;

    /// Multiplication
    fn mul(self, rhs: Self) -> Result<Self>;

    /// True (exact) division
    fn true_div(self, rhs: Self) -> Result<Self>;

    /// Floor division: the quotient rounded toward negative infinity
    fn floor_div(self, rhs: Self) -> Result<Self>;

    /// Floored remainder: `self - floor_div(self, rhs) * rhs`
    ///
    /// Nonzero results take the sign of the divisor.
    fn rem(self, rhs: Self) -> Result<Self>;

    /// Floor quotient and remainder as one pair
    fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        let q = self.clone().floor_div(rhs.clone())?;
        let r = self.rem(rhs)?;
        Ok((q, r))
    }

    /// Round to `ndigits` decimal digits, ties to even
    ///
    /// Only meaningful where the coefficient carries sub-unit precision;
    /// the default body reports [`Error::UnsupportedOperation`] and the
    /// float types override it.
    fn round(self, ndigits: i32) -> Result<Self> {
        let _ = ndigits;
        Err(Error::unsupported("round", std::any::type_name::<Self>()))
    }

    /// Complex conjugate; identity for types without one
    fn conjugate(self) -> Self {
        self
    }

    /// Absolute magnitude, for near-zero classification
    fn magnitude(&self) -> f64;
}

/// Floored quotient and remainder for floats
///
/// `(a / b).floor()` and the matching remainder; division by zero follows
/// IEEE semantics (infinite or NaN results, no error).
fn floored<F: Float>(a: F, b: F) -> (F, F) {
    let q = (a / b).floor();
    (q, a - q * b)
}

macro_rules! impl_coefficient_int {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            fn neg(self) -> Result<Self> {
                self.checked_neg().ok_or(Error::overflow("neg"))
            }

            fn add(self, rhs: Self) -> Result<Self> {
                self.checked_add(rhs).ok_or(Error::overflow("add"))
            }

            fn sub(self, rhs: Self) -> Result<Self> {
                self.checked_sub(rhs).ok_or(Error::overflow("sub"))
            }

            fn mul(self, rhs: Self) -> Result<Self> {
                self.checked_mul(rhs).ok_or(Error::overflow("mul"))
            }

            /// Exact division; a non-integer quotient is an overflow of the
            /// integer ring, not silently truncated.
            fn true_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(Error::division_by_zero("true_div"));
                }
                let q = self.checked_div(rhs).ok_or(Error::overflow("true_div"))?;
                if q * rhs != self {
                    return Err(Error::unsupported("true_div", stringify!($t)));
                }
                Ok(q)
            }

            fn floor_div(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(Error::division_by_zero("floor_div"));
                }
                let q = self.checked_div(rhs).ok_or(Error::overflow("floor_div"))?;
                let r = self % rhs;
                // round toward negative infinity, not toward zero
                if r != 0 && ((r < 0) != (rhs < 0)) {
                    Ok(q - 1)
                } else {
                    Ok(q)
                }
            }

            fn rem(self, rhs: Self) -> Result<Self> {
                if rhs == 0 {
                    return Err(Error::division_by_zero("rem"));
                }
                if self.checked_div(rhs).is_none() {
                    return Err(Error::overflow("rem"));
                }
                let r = self % rhs;
                if r != 0 && ((r < 0) != (rhs < 0)) {
                    Ok(r + rhs)
                } else {
                    Ok(r)
                }
            }

            fn magnitude(&self) -> f64 {
                (*self as f64).abs()
            }
        }
    )*};
}

impl_coefficient_int!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_coefficient_float {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            fn neg(self) -> Result<Self> {
                Ok(-self)
            }

            fn add(self, rhs: Self) -> Result<Self> {
                Ok(self + rhs)
            }

            fn sub(self, rhs: Self) -> Result<Self> {
                Ok(self - rhs)
            }

            fn mul(self, rhs: Self) -> Result<Self> {
                Ok(self * rhs)
            }

            fn true_div(self, rhs: Self) -> Result<Self> {
                Ok(self / rhs)
            }

            fn floor_div(self, rhs: Self) -> Result<Self> {
                Ok(floored(self, rhs).0)
            }

            fn rem(self, rhs: Self) -> Result<Self> {
                Ok(floored(self, rhs).1)
            }

            fn div_rem(self, rhs: Self) -> Result<(Self, Self)> {
                Ok(floored(self, rhs))
            }

            fn round(self, ndigits: i32) -> Result<Self> {
                let factor = (10.0 as $t).powi(ndigits);
                Ok((self * factor).round_ties_even() / factor)
            }

            fn magnitude(&self) -> f64 {
                f64::from(self.abs())
            }
        }
    )*};
}

impl_coefficient_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_floored_division() {
        // Python number model: -7 // 2 == -4, -7 % 2 == 1
        assert_eq!(Coefficient::floor_div(-7i64, 2).unwrap(), -4);
        assert_eq!(Coefficient::rem(-7i64, 2).unwrap(), 1);
        assert_eq!(Coefficient::floor_div(7i64, -2).unwrap(), -4);
        assert_eq!(Coefficient::rem(7i64, -2).unwrap(), -1);
        assert_eq!(Coefficient::div_rem(7i64, 2).unwrap(), (3, 1));
    }

    #[test]
    fn test_int_overflow() {
        assert_eq!(
            Coefficient::add(i8::MAX, 1i8),
            Err(Error::overflow("add"))
        );
        assert_eq!(Coefficient::neg(i8::MIN), Err(Error::overflow("neg")));
        assert_eq!(
            Coefficient::floor_div(i8::MIN, -1i8),
            Err(Error::overflow("floor_div"))
        );
    }

    #[test]
    fn test_int_division_by_zero() {
        assert_eq!(
            Coefficient::floor_div(1i64, 0),
            Err(Error::division_by_zero("floor_div"))
        );
        assert_eq!(
            Coefficient::rem(1i64, 0),
            Err(Error::division_by_zero("rem"))
        );
        assert_eq!(
            Coefficient::true_div(1i64, 0),
            Err(Error::division_by_zero("true_div"))
        );
    }

    #[test]
    fn test_int_true_div_exactness() {
        assert_eq!(Coefficient::true_div(8i64, 2).unwrap(), 4);
        assert!(Coefficient::true_div(7i64, 2).is_err());
    }

    #[test]
    fn test_float_floored_division() {
        assert_eq!(Coefficient::floor_div(-7.0f64, 2.0).unwrap(), -4.0);
        assert_eq!(Coefficient::rem(-7.0f64, 2.0).unwrap(), 1.0);
        assert_eq!(Coefficient::div_rem(7.5f64, 2.0).unwrap(), (3.0, 1.5));
    }

    #[test]
    fn test_float_round_ties_to_even() {
        assert_eq!(Coefficient::round(2.5f64, 0).unwrap(), 2.0);
        assert_eq!(Coefficient::round(3.5f64, 0).unwrap(), 4.0);
        assert_eq!(Coefficient::round(-2.5f64, 0).unwrap(), -2.0);
        assert_eq!(Coefficient::round(1.25f64, 1).unwrap(), 1.2);
        assert_eq!(Coefficient::round(0.375f32, 2).unwrap(), 0.38);
    }

    #[test]
    fn test_round_unsupported_outside_floats() {
        assert!(Coefficient::round(3i64, 0).is_err());
        assert!(matches!(
            Coefficient::round(3i64, 0),
            Err(Error::UnsupportedOperation { op: "round", .. })
        ));
    }

    #[test]
    fn test_conjugate_default_is_identity() {
        assert_eq!(3i64.conjugate(), 3);
        assert_eq!(2.5f64.conjugate(), 2.5);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-3i64).magnitude(), 3.0);
        assert_eq!((-2.5f64).magnitude(), 2.5);
    }
}
