use std::ops::Neg;

/// Numeric priority accepted by the queues of this crate.
///
/// Priorities are compared only with `<`, so a partial order is enough.
/// Max-queues store negated priorities, therefore negation must reverse the order.
///
/// Values that compare as unordered (`NaN`) are accepted without checks,
/// but the resulting extraction order is unspecified.
/// Keeping such values out of the queue is the responsibility of the caller.
pub trait Priority: Copy + PartialOrd + Neg<Output = Self> {}

macro_rules! impl_priority {
    ($($t:ty),*) => {
        $(impl Priority for $t {})*
    };
}

impl_priority!(f32, f64);
