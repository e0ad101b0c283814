//! Weights are elements of an *ordered monoid*: a set $W$ with an associative
//! operation $\oplus$, a neutral element $0$ and a total order. All algorithms in
//! this crate combine and compare weights exclusively through a [WeightAlgebra],
//! so the same code runs over floating point numbers, bounded integers and
//! arbitrary precision numbers alike.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use pathalgebra::weight::*;
//!
//! let algebra = I64Weights;
//! let w = algebra.append(&3, &4);
//! assert_eq!(w, 7);
//! assert_eq!(algebra.compare(&w, &algebra.identity()), Ordering::Greater);
//! assert_eq!(algebra.inverse(&w), -7);
//! ```

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// The ordered-monoid contract used for path costs.
///
/// Implementations must guarantee that [append](WeightAlgebra::append) is associative
/// and that [identity](WeightAlgebra::identity) is neutral for it. Weights are combined
/// left-to-right along a path, i.e. the weight of a path $e_1 \dots e_k$ is
/// $((0 \oplus w(e_1)) \oplus \dots) \oplus w(e_k)$.
pub trait WeightAlgebra<W> {
    fn identity(&self) -> W;

    /// The cost of concatenating a segment of weight `a` with a segment of weight `b`.
    fn append(&self, a:&W, b:&W) -> W;

    fn inverse(&self, a:&W) -> W;

    fn compare(&self, a:&W, b:&W) -> Ordering;

    /// Folds `weights` with [append](WeightAlgebra::append), starting at the identity.
    fn sum<'a, I>(&self, weights:I) -> W where I: IntoIterator<Item=&'a W>, W: 'a {
        weights.into_iter().fold(self.identity(), |acc, w| self.append(&acc, w))
    }

    /// Returns `true` if `a` is strictly smaller than the identity.
    fn is_negative(&self, a:&W) -> bool {
        self.compare(a, &self.identity()) == Ordering::Less
    }
}

impl<W, A> WeightAlgebra<W> for &A where A: WeightAlgebra<W> + ?Sized {
    fn identity(&self) -> W {
        (**self).identity()
    }

    fn append(&self, a:&W, b:&W) -> W {
        (**self).append(a, b)
    }

    fn inverse(&self, a:&W) -> W {
        (**self).inverse(a)
    }

    fn compare(&self, a:&W, b:&W) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Double precision weights under addition. Weights compare numerically, so
/// `-0.0` equals `0.0`. `NaN` falls back to the IEEE 754 total order and sorts
/// above every other value instead of poisoning the search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct F64Weights;

impl WeightAlgebra<f64> for F64Weights {
    fn identity(&self) -> f64 {
        0.0
    }

    fn append(&self, a:&f64, b:&f64) -> f64 {
        a + b
    }

    fn inverse(&self, a:&f64) -> f64 {
        -a
    }

    fn compare(&self, a:&f64, b:&f64) -> Ordering {
        a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
    }
}

/// 32-bit integer weights under saturating addition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct I32Weights;

impl WeightAlgebra<i32> for I32Weights {
    fn identity(&self) -> i32 {
        0
    }

    fn append(&self, a:&i32, b:&i32) -> i32 {
        a.saturating_add(*b)
    }

    fn inverse(&self, a:&i32) -> i32 {
        a.saturating_neg()
    }

    fn compare(&self, a:&i32, b:&i32) -> Ordering {
        a.cmp(b)
    }
}

/// 64-bit integer weights under saturating addition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct I64Weights;

impl WeightAlgebra<i64> for I64Weights {
    fn identity(&self) -> i64 {
        0
    }

    fn append(&self, a:&i64, b:&i64) -> i64 {
        a.saturating_add(*b)
    }

    fn inverse(&self, a:&i64) -> i64 {
        a.saturating_neg()
    }

    fn compare(&self, a:&i64, b:&i64) -> Ordering {
        a.cmp(b)
    }
}

/// Arbitrary precision integer weights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BigIntWeights;

impl WeightAlgebra<BigInt> for BigIntWeights {
    fn identity(&self) -> BigInt {
        BigInt::from(0)
    }

    fn append(&self, a:&BigInt, b:&BigInt) -> BigInt {
        a + b
    }

    fn inverse(&self, a:&BigInt) -> BigInt {
        -a.clone()
    }

    fn compare(&self, a:&BigInt, b:&BigInt) -> Ordering {
        a.cmp(b)
    }
}

/// Arbitrary precision decimal weights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BigDecimalWeights;

impl WeightAlgebra<BigDecimal> for BigDecimalWeights {
    fn identity(&self) -> BigDecimal {
        BigDecimal::from(0)
    }

    fn append(&self, a:&BigDecimal, b:&BigDecimal) -> BigDecimal {
        a + b
    }

    fn inverse(&self, a:&BigDecimal) -> BigDecimal {
        -a.clone()
    }

    fn compare(&self, a:&BigDecimal, b:&BigDecimal) -> Ordering {
        a.cmp(b)
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
