//! Key sequences for comparing the trees.
//!
//! None of these touch a tree, they only decide which keys get inserted and in what order.
//! Randomness is always injected so callers can seed it and reproduce a run.

use std::collections::VecDeque;

use rand::Rng;

/// Draws `count` keys independently and uniformly from `1..=max`. Duplicates are expected.
///
/// The range `1..=max` is empty when `max < 1`, so no keys can be drawn and the result is empty
/// whatever `count` is.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let keys = avl::keys::random(100, 10, &mut rng);
///
/// assert_eq!(keys.len(), 100);
/// assert!(keys.iter().all(|k| (1..=10).contains(k)));
///
/// // Same seed, same keys.
/// assert_eq!(keys, avl::keys::random(100, 10, &mut StdRng::seed_from_u64(7)));
///
/// // Nothing to draw from.
/// assert!(avl::keys::random(100, 0, &mut rng).is_empty());
/// ```
pub fn random<R>(count: usize, max: i32, rng: &mut R) -> Vec<i32>
where
    R: Rng + ?Sized,
{
    if max < 1 {
        return Vec::new();
    }
    (0..count).map(|_| rng.gen_range(1..=max)).collect()
}

/// The keys `1..=count` in ascending order. This is the worst case for an unbalanced tree.
pub fn ascending(count: usize) -> Vec<i32> {
    (1..).take(count).collect()
}

/// The keys `1..=count` ordered so that inserting them one at a time builds a perfectly balanced
/// tree: the midpoint of the sorted keys comes first, then the midpoints of the two halves, then
/// the midpoints of the four quarters, and so on, one level of the finished tree at a time.
///
/// Every prefix of this order is itself a balanced tree, so an AVL tree fed this order never
/// needs to rotate and ends up with the same shape as a plain BST fed the same keys.
///
/// # Examples
///
/// ```
/// assert_eq!(avl::keys::best_case(7), vec![4, 2, 6, 1, 3, 5, 7]);
/// ```
pub fn best_case(count: usize) -> Vec<i32> {
    let sorted = ascending(count);
    let mut order = Vec::with_capacity(count);
    let mut ranges = VecDeque::from([&sorted[..]]);
    while let Some(xs) = ranges.pop_front() {
        if xs.is_empty() {
            continue;
        }
        let mid = xs.len() / 2;
        order.push(xs[mid]);
        ranges.push_back(&xs[..mid]);
        ranges.push_back(&xs[mid + 1..]);
    }
    order
}
