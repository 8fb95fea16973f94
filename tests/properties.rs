use std::collections::BTreeSet;

use avl::{avl as balanced, keys, unbalanced};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The tallest an AVL tree with `n` keys can be, rounded up.
fn avl_height_bound(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2() - 0.328).ceil() as usize
}

fn sorted_distinct(xs: &[i32]) -> Vec<i32> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

quickcheck::quickcheck! {
    fn avl_traversal_is_sorted_distinct(xs: Vec<i32>) -> bool {
        let tree: balanced::Tree<_> = xs.iter().copied().collect();
        tree.traverse() == sorted_distinct(&xs)
    }
}

quickcheck::quickcheck! {
    fn unbalanced_traversal_is_sorted_distinct(xs: Vec<i32>) -> bool {
        let tree: unbalanced::Tree<_> = xs.iter().copied().collect();
        tree.traverse() == sorted_distinct(&xs)
    }
}

quickcheck::quickcheck! {
    fn avl_height_is_bounded(xs: Vec<i16>) -> bool {
        let mut tree = balanced::Tree::new();
        xs.into_iter().all(|x| {
            tree.insert(x);
            tree.height() <= avl_height_bound(tree.len())
        })
    }
}

quickcheck::quickcheck! {
    fn avl_duplicate_leaves_tree_unchanged(xs: Vec<i8>, again: i8) -> bool {
        let mut tree: balanced::Tree<_> = xs.iter().copied().collect();
        tree.insert(again);
        let before = tree.clone();
        tree.insert(again);

        tree == before && tree.len() == before.len()
    }
}

quickcheck::quickcheck! {
    fn both_trees_hold_the_same_keys(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let plain: unbalanced::Tree<_> = xs.iter().copied().collect();
        let avl: balanced::Tree<_> = xs.iter().copied().collect();

        plain.len() == avl.len()
            && plain.iter().eq(avl.iter())
            && probes.iter().all(|p| plain.contains(p) == avl.contains(p))
    }
}

#[test]
fn small_tree() {
    let tree: balanced::Tree<_> = [5, 3, 8].into_iter().collect();

    assert_eq!(tree.traverse(), [3, 5, 8]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.len(), 3);
}

#[test]
fn ascending_triple_rotates_left() {
    let tree: balanced::Tree<_> = [10, 20, 30].into_iter().collect();
    let chain: unbalanced::Tree<_> = [10, 20, 30].into_iter().collect();

    assert_eq!(tree.height(), 2);
    assert_eq!(chain.height(), 3);
    assert_eq!(tree.traverse(), chain.traverse());
}

#[test]
fn balanced_versus_degenerate() {
    let tree: balanced::Tree<_> = (1..=7).collect();
    let chain: unbalanced::Tree<_> = (1..=7).collect();

    assert_eq!(tree.height(), 3);
    assert_eq!(chain.height(), 7);
    assert_eq!(tree.traverse(), chain.traverse());
}

#[test]
fn keys_compare_by_value() {
    let mut tree = balanced::Tree::new();
    let first = String::from("key");
    let second = String::from("key");

    tree.insert(first);
    tree.insert(second);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.traverse(), ["key"]);
}

#[test]
fn random_batch_matches_btree_set() {
    let mut rng = StdRng::seed_from_u64(2024);
    let size = (1 << 15) - 1;
    let batch = keys::random(size, size as i32, &mut rng);

    let reference: BTreeSet<_> = batch.iter().copied().collect();
    let avl: balanced::Tree<_> = batch.iter().copied().collect();
    let plain: unbalanced::Tree<_> = batch.iter().copied().collect();

    assert_eq!(avl.len(), reference.len());
    assert!(avl.iter().eq(reference.iter()));
    assert!(plain.iter().eq(reference.iter()));
    assert!(avl.height() <= avl_height_bound(avl.len()));
    assert!(avl.height() <= plain.height());
}

#[test]
fn iterators() {
    let tree: balanced::Tree<_> = keys::best_case(15).into_iter().collect();

    let mut iter: avl::traversal::Iter<'_, i32> = tree.iter();
    assert_eq!(iter.len(), 15);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 14);

    let mut total = 0;
    for key in &tree {
        total += key;
    }
    assert_eq!(total, (1..=15).sum::<i32>());
}
