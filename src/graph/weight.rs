use std::fmt::{Debug, Display};

use num_traits::{Bounded, CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Numeric type usable as an edge weight and as a path distance.
///
/// Every weight type carries its own "infinity" sentinel. A sum that would
/// reach or pass the sentinel is rejected by [`Weight::checked_sum`], so
/// every recorded distance stays strictly below it.
pub trait Weight: Copy + Ord + Debug + Display + Zero + Send + Sync {
    /// Distance assigned to vertices not (yet) reached.
    fn infinity() -> Self;

    /// `self + other`, or `None` if the sum overflows or reaches [`Weight::infinity`]
    fn checked_sum(self, other: Self) -> Option<Self>;

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other).filter(|sum| *sum != Self::infinity())
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn infinity() -> Self {
                    OrderedFloat(<$t>::INFINITY)
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self.0 + other.0;
                    sum.is_finite().then_some(OrderedFloat(sum))
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
