//! Discrete sampling over small probability tables.
//!
//! The tables used here hold at most a handful of entries, one per closure
//! attached to a shading point, so a linear search beats a binary search.

use crate::math::*;

/// Normalizes non-negative weights in place so they sum to 1 and returns the
/// total weight. When the total is zero the weights are left untouched (all
/// zero); there is no uniform fallback.
///
/// * `weights` - The weights to normalize.
pub fn normalize_weights(weights: &mut [Float]) -> Float {
    let total: Float = weights.iter().sum();
    if total != 0.0 {
        let rcp_total = 1.0 / total;
        for w in weights.iter_mut() {
            *w *= rcp_total;
        }
    }
    total
}

/// Turns non-negative weights into a cumulative distribution in place and
/// returns the total weight. The last entry is set to exactly 1 so that any
/// sample in [0, 1) selects an entry. When the total is zero the table is left
/// as the (all zero) running sum.
///
/// * `cdf` - The weights on input; the cumulative distribution on output.
pub fn build_cdf(cdf: &mut [Float]) -> Float {
    let n = cdf.len();
    if n == 0 {
        return 0.0;
    }

    let mut total = 0.0;
    for c in cdf.iter_mut() {
        total += *c;
        *c = total;
    }

    if total != 0.0 {
        let rcp_total = 1.0 / total;
        for c in cdf[..n - 1].iter_mut() {
            *c *= rcp_total;
        }
        cdf[n - 1] = 1.0;
    }
    total
}

/// Selects an entry from a table of probabilities (not cumulative) given a
/// uniform sample in [0, 1). Entry `i` is chosen when the running sum of
/// probabilities first reaches or exceeds `u`; entries with zero probability
/// are never chosen. Returns `None` if all probabilities are zero.
///
/// * `pdfs` - Probabilities that sum to 1 (or are all zero).
/// * `u`    - The uniform sample.
pub fn sample_pdf_linear_search(pdfs: &[Float], u: Float) -> Option<usize> {
    let mut cdf = 0.0;
    let mut last = None;
    for (i, pdf) in pdfs.iter().enumerate() {
        if *pdf > 0.0 {
            cdf += *pdf;
            if u <= cdf {
                return Some(i);
            }
            last = Some(i);
        }
    }

    // Round-off left `u` above the running sum; use the last live entry.
    last
}

/// Selects an entry from a cumulative distribution given a uniform sample in
/// [0, 1). Returns the first index whose cumulative value reaches or exceeds
/// `u`.
///
/// * `cdf` - Non-decreasing cumulative distribution ending with 1.
/// * `u`   - The uniform sample.
pub fn sample_cdf_linear_search(cdf: &[Float], u: Float) -> usize {
    assert!(!cdf.is_empty());
    cdf.iter().position(|c| u <= *c).unwrap_or(cdf.len() - 1)
}
