//! Balanced integer factoring for grid and cube shapes.
//!
//! Rank sorting quality depends on how square (or cubic) the layout is, so
//! pixel counts are factored into dimensions as close to `√n` / `n^(1/3)` as
//! the prime factorization of `n` allows. Both factorizers are fully
//! deterministic, including tie-breaks: downstream sort output depends on the
//! exact shape chosen.

use super::error::ShapeError;

/// Integer square root: the largest `r` with `r * r <= n`.
fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Prime factors of `n` in ascending order, with multiplicity.
pub(crate) fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            n /= i;
            factors.push(i);
        } else {
            i += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Factor `n` into the most balanced pair `(a, b)` with `a * b == n`.
///
/// `a` is the largest divisor of `n` that is at most `√n`, found by scanning
/// downward from `isqrt(n)`, so `a <= b` always holds. For prime `n` the
/// result degenerates to `(1, n)`.
///
/// # Errors
///
/// [`ShapeError::InvalidCount`] if `n == 0`.
///
/// # Example
///
/// ```
/// use pixel_remap::shape::balanced_pair;
///
/// assert_eq!(balanced_pair(12).unwrap(), (3, 4));
/// assert_eq!(balanced_pair(10).unwrap(), (2, 5));
/// assert_eq!(balanced_pair(7).unwrap(), (1, 7));
/// ```
pub fn balanced_pair(n: usize) -> Result<(usize, usize), ShapeError> {
    if n == 0 {
        return Err(ShapeError::InvalidCount);
    }
    let mut a = isqrt(n);
    while n % a != 0 {
        a -= 1;
    }
    Ok((a, n / a))
}

/// Factor `n` into a balanced triplet `(d, h, w)` with `d * h * w == n`.
///
/// Greedy heuristic over the prime factorization: factors are taken from
/// largest to smallest and multiplied into the first of three bins whose
/// product would stay strictly below `n^(1/3)`; when no bin qualifies, the
/// factor goes to the bin holding the smallest value (lowest index on ties).
/// The bins are returned in order as `(depth, height, width)` — an arbitrary
/// but fixed convention.
///
/// This is deliberately not optimal balancing; the scan order and tie-break
/// must stay exactly as written so shapes are reproducible.
///
/// # Errors
///
/// [`ShapeError::InvalidCount`] if `n == 0`.
///
/// # Example
///
/// ```
/// use pixel_remap::shape::balanced_triplet;
///
/// assert_eq!(balanced_triplet(8).unwrap(), (2, 2, 2));
/// assert_eq!(balanced_triplet(12).unwrap(), (3, 2, 2));
/// ```
pub fn balanced_triplet(n: usize) -> Result<(usize, usize, usize), ShapeError> {
    if n == 0 {
        return Err(ShapeError::InvalidCount);
    }
    let factors = prime_factors(n);
    let target = (n as f64).cbrt();
    let mut bins = [1usize; 3];

    for &p in factors.iter().rev() {
        let fits = bins.iter().position(|&bin| ((bin * p) as f64) < target);
        match fits {
            Some(i) => bins[i] *= p,
            None => {
                // min_by_key keeps the first minimum, i.e. the lowest index.
                let (i, _) = bins
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, &bin)| bin)
                    .unwrap_or((0, &1));
                bins[i] *= p;
            }
        }
    }
    Ok((bins[0], bins[1], bins[2]))
}
