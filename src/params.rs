//! Derivation of the algorithm parameters `k` and `t` from the vertex count.
//!
//! Both parameters are power-of-two approximations computed from
//! `⌊log₂ n⌋`: `k ≈ log^(1/3) n` bounds the base-case truncation and the
//! number of relaxation sweeps in pivot finding, `t ≈ log^(2/3) n` controls
//! block capacities and the recursion depth.

/// `k = max(1, 2^(⌊log₂ n⌋ / 3))`.
pub fn compute_k(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    pow2_saturating(n.ilog2() as usize / 3)
}

/// `t = max(1, 2^(2·⌊log₂ n⌋ / 3))`.
pub fn compute_t(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    pow2_saturating(2 * n.ilog2() as usize / 3)
}

/// Recursion level for the top-level call: `⌊ln n / t⌋ + 1`.
pub fn top_level(n: usize, t: usize) -> usize {
    let n = n.max(1) as f64;
    (n.ln() / t.max(1) as f64).floor() as usize + 1
}

/// `2^exp`, saturating at `usize::MAX` instead of overflowing.
///
/// Frame capacities such as `2^((l-1)·t)` routinely exceed the machine word
/// for the derived `t`; saturation keeps them as effectively-unbounded caps.
pub fn pow2_saturating(exp: usize) -> usize {
    if exp >= usize::BITS as usize {
        usize::MAX
    } else {
        1usize << exp
    }
}
