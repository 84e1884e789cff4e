/// Adds `a` and `b`, returning the correctly rounded sum together with the
/// exact rounding error.
///
/// The returned pair `(s, e)` satisfies `a + b == s + e` in infinite
/// precision, where `s` is the IEEE-754 correctly rounded sum. This is the
/// branch-free two-sum of Knuth, which makes no assumption on the relative
/// magnitudes of `a` and `b` (unlike the cheaper fast-two-sum, which requires
/// `|a| >= |b|`).
///
/// `NaN` and infinite inputs propagate per ordinary floating-point rules: `s`
/// is the usual `a + b` and `e` is not meaningful.
///
/// # Arguments
/// - `a`: the first addend.
/// - `b`: the second addend.
///
/// # Examples
/// ```
/// # use geodesic_sum::accum::two_sum;
/// // 1 + 2^-53 rounds to 1; the error term recovers the lost bit.
/// let (s, e) = two_sum(1.0, f64::EPSILON / 2.0);
/// assert_eq!(s, 1.0);
/// assert_eq!(e, f64::EPSILON / 2.0);
/// ```
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let v = s - a;
    let e = (a - (s - v)) + (b - v);
    (s, e)
}
