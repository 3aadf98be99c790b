use bst_inspect::tree::Tree;

use std::collections::BTreeSet;

/// Builds a tree from a slice of values, unwrapping the (infallible for
/// present values) insert results.
fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for &x in xs {
        tree.insert(x).unwrap();
    }
    tree
}

#[quickcheck]
fn ordering_invariant_always_holds(xs: Vec<i8>) -> bool {
    tree_of(&xs).is_bst()
}

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let expected: BTreeSet<i8> = xs.into_iter().collect();

    tree.in_order() == expected.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn reinserting_everything_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let before: Vec<i8> = tree.in_order().into_iter().copied().collect();
    let height_before = tree.height();

    for &x in &xs {
        tree.insert(x).unwrap();
    }

    let after: Vec<i8> = tree.in_order().into_iter().copied().collect();
    before == after && tree.height() == height_before
}

#[quickcheck]
fn ascending_inserts_build_a_right_arm(n: u8) -> bool {
    // Keep the arm short enough to stay friendly to the call stack.
    let n = i64::from(n % 64);
    let mut tree = Tree::new();
    for x in 0..n {
        tree.insert(x).unwrap();
    }

    // Node at depth d for every d in 0..n, plus -1 per absent subtree
    // (there are n + 1 of those in a chain of n nodes).
    let expected_sum = if n == 0 { -1 } else { n * (n - 1) / 2 - (n + 1) };

    tree.height() == n as usize
        && tree.sum_depths() == expected_sum
        && tree.is_bst()
        && (n < 3 || !tree.is_avl())
        // The arm leans right, so no node is two levels taller on the left.
        && tree.two_level_nodes().is_empty()
}

#[quickcheck]
fn two_level_values_come_from_the_tree(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let stored: BTreeSet<i8> = xs.into_iter().collect();

    tree.two_level_nodes().into_iter().all(|v| stored.contains(v))
}

#[test]
fn descending_arm_reports_its_top() {
    let tree = tree_of(&[30, 20, 10]);
    assert!(!tree.is_avl());
    assert_eq!(tree.two_level_nodes(), [&30]);
}

#[test]
fn absent_value_insert_leaves_tree_unchanged() {
    use bst_inspect::error::TreeError;

    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.insert(None), Err(TreeError::AbsentValue));
    assert_eq!(tree.in_order(), [&1, &2, &3]);
    assert_eq!(tree.height(), 2);
}
