//! The calculator itself.
//!
//! `Calc` does integer arithmetic and nothing else. Parsing, overflow
//! policy and rendering live in [`crate::eval`] and [`crate::output`].

/// Stateless integer calculator.
///
/// Every instance behaves identically; create one wherever it is needed.
///
/// ```
/// use srpcalc::calc::Calc;
///
/// let c = Calc;
/// assert_eq!(c.add(2, 2), 4);
/// assert_eq!(c.sub(2, 2), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calc;

impl Calc {
    /// Sum of `a` and `b`. Wraps on overflow.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    /// Difference `a - b`. Wraps on overflow.
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    /// Sum of `a` and `b`, or `None` if it is not representable.
    pub fn checked_add(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_add(b)
    }

    /// Difference `a - b`, or `None` if it is not representable.
    pub fn checked_sub(&self, a: i64, b: i64) -> Option<i64> {
        a.checked_sub(b)
    }
}
