//! Shannon entropy calculation for Hangman guesses
//!
//! Letter guesses split the candidate set into signature groups; the entropy
//! of that split is the expected information gain of the guess. A word guess
//! is a two-outcome draw (right or wrong) and is scored the same way.

/// Entropies closer than this are treated as equal
///
/// Group entropies and the word-guess entropy are summed in different orders
/// and can differ in the last bits for the same distribution.
pub const ENTROPY_TOLERANCE: f64 = 1e-12;

/// Base-2 logarithm
///
/// `x` must be positive. Callers drop zero-probability terms before calling.
#[inline]
#[must_use]
pub fn log2(x: f64) -> f64 {
    debug_assert!(x > 0.0, "log2 domain is x > 0, got {x}");
    x.log2()
}

/// Entropy of partitioning `total` items into groups of the given sizes
///
/// H = -Σ (size/total) * log₂(size/total)
///
/// # Properties
/// - Returns 0.0 when there is a single group
/// - Maximized when every group has size 1 (log₂(total))
/// - Every size must be positive and the sizes must sum to `total`
///
/// # Examples
/// ```
/// use hangman_entropy::solver::entropy::group_entropy;
///
/// let even = group_entropy([2, 2], 4);
/// assert!((even - 1.0).abs() < 1e-9);
///
/// let certain = group_entropy([4], 4);
/// assert!(certain.abs() < 1e-9);
/// ```
#[must_use]
pub fn group_entropy<I>(group_sizes: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    debug_assert!(total > 0, "group_entropy needs at least one item");

    let total_f = total as f64;
    let mut seen = 0;

    let entropy: f64 = group_sizes
        .into_iter()
        .map(|size| {
            debug_assert!(size > 0, "signature groups are never empty");
            seen += size;
            let p = size as f64 / total_f;
            -p * log2(p)
        })
        .sum();

    debug_assert_eq!(seen, total, "group sizes must sum to total");

    // A single group yields -(1 * log2(1)) = -0.0
    if entropy > 0.0 { entropy } else { 0.0 }
}

/// Entropy of guessing one word at random out of `n` equally likely candidates
///
/// Treated as a Bernoulli trial with success probability p = 1/n:
/// H = -(p·log₂p + (1-p)·log₂(1-p))
///
/// With one candidate the outcome is certain and the entropy is 0.
///
/// # Examples
/// ```
/// use hangman_entropy::solver::entropy::binary_guess_entropy;
///
/// assert!((binary_guess_entropy(2) - 1.0).abs() < 1e-9);
/// assert!((binary_guess_entropy(3) - 0.918_295_834).abs() < 1e-6);
/// ```
#[must_use]
pub fn binary_guess_entropy(n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }

    let p = 1.0 / n as f64;
    let q = 1.0 - p;
    -(p * log2(p) + q * log2(q))
}
