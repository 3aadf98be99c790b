//! A plain BST over any `Ord` value type. Every node caches the height
//! of its subtree, and the tree exposes diagnostic traversals over that
//! bookkeeping: sum of depths, "two-level" node detection, a global BST
//! ordering check, and an AVL balance check.
//!
//! Nothing here rebalances. The AVL check only reports whether the
//! current shape would satisfy an AVL tree's invariant.
//!
//! # Examples
//!
//! ```
//! use bst_inspect::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [2, 1, 3] {
//!     tree.insert(x).unwrap();
//! }
//!
//! assert_eq!(tree.in_order(), [&1, &2, &3]);
//! assert!(tree.is_bst());
//! assert!(tree.is_avl());
//!
//! // Grow a long left arm; the shape is no longer AVL-balanced.
//! tree.insert(0).unwrap();
//! tree.insert(-1).unwrap();
//! assert!(!tree.is_avl());
//! assert_eq!(tree.two_level_nodes(), [&2, &1]);
//! ```

use std::cmp::Ordering;

use crate::error::{TreeError, TreeResult};

/// An owned, possibly absent subtree.
type Link<E> = Option<Box<Node<E>>>;

/// A `Node` stores one value and owns up to two children. The cached
/// `height` is maintained by insertion on the way back up the recursion,
/// so reading it never rescans the subtree.
struct Node<E> {
    value: E,
    left: Link<E>,
    right: Link<E>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<E> Node<E> {
    fn new(value: E) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Recomputes this node's cached height from its children's cached
    /// heights. Must be called after any structural change below.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

/// The cached height of a subtree; 0 if absent.
fn height<E>(link: &Link<E>) -> usize {
    match link {
        None => 0,
        Some(n) => n.height,
    }
}

/// Height of the left subtree minus height of the right subtree;
/// 0 if the node itself is absent.
fn balance_factor<E>(link: &Link<E>) -> isize {
    match link {
        None => 0,
        Some(n) => height(&n.left) as isize - height(&n.right) as isize,
    }
}

/// A Binary Search Tree storing a set of values. Duplicates are never
/// stored: inserting a value already present is a silent no-op. The tree
/// never rebalances; its diagnostic queries report on the shape instead.
pub struct Tree<E> {
    root: Link<E>,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Tree<E> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the given value into the tree, keeping the BST ordering
    /// invariant and every cached height consistent. Inserting a value
    /// already present leaves the tree untouched.
    ///
    /// Passing an absent value fails with [`TreeError::AbsentValue`] and
    /// the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_inspect::error::TreeError;
    /// use bst_inspect::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    ///
    /// // Duplicates are dropped, not errors.
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.height(), 1);
    ///
    /// // Absent values are rejected.
    /// assert_eq!(tree.insert(None), Err(TreeError::AbsentValue));
    /// ```
    pub fn insert(&mut self, value: impl Into<Option<E>>) -> TreeResult<()>
    where
        E: Ord,
    {
        match value.into() {
            None => Err(TreeError::AbsentValue),
            Some(value) => {
                insert(&mut self.root, value);
                Ok(())
            }
        }
    }

    /// Gets the height of this tree: 0 when empty, 1 for a single node.
    /// Reads the root's cached height, so this is `O(1)`.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns the stored values in ascending order by an in-order
    /// traversal (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_inspect::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [3, 1, 2] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&E> {
        let mut out = Vec::new();
        push_in_order(&self.root, &mut out);
        out
    }

    /// Sums the depths of every node, where the root has depth 0 and
    /// every other node has its parent's depth plus 1.
    ///
    /// An absent subtree contributes exactly -1 to the sum it
    /// participates in, so the empty tree sums to -1 and a lone root
    /// sums to -2 (its depth of 0 plus two absent children). This
    /// asymmetric convention is deliberate; do not normalize it to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_inspect::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.sum_depths(), -1);
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.sum_depths(), -2);
    /// ```
    pub fn sum_depths(&self) -> i64 {
        sum_depths(&self.root, 0)
    }

    /// Finds the "two-level" nodes: the nodes whose left subtree is
    /// exactly two levels taller than their right subtree (balance
    /// factor +2). The check is one-sided; a right subtree two levels
    /// taller does not qualify. Values are returned in pre-order
    /// visitation order.
    pub fn two_level_nodes(&self) -> Vec<&E> {
        let mut out = Vec::new();
        push_two_level(&self.root, &mut out);
        out
    }

    /// Verifies the global BST ordering invariant: every node's value
    /// lies strictly inside the open bounds inherited from its
    /// ancestors. This catches misplacements anywhere in a subtree, not
    /// just between a parent and its immediate children.
    ///
    /// Always true for trees built solely through [`insert`][Self::insert].
    pub fn is_bst(&self) -> bool
    where
        E: Ord,
    {
        is_bst(&self.root, None, None)
    }

    /// Checks whether every node's balance factor lies in `[-1, 1]`,
    /// i.e. whether the current shape would satisfy an AVL tree's
    /// balance invariant. This inspects shape only, not value placement;
    /// callers wanting full AVL conformance must also call
    /// [`is_bst`][Self::is_bst].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_inspect::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 1..=3 {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// // 1, 2, 3 inserted ascending is a pure right arm.
    /// assert!(!tree.is_avl());
    /// ```
    pub fn is_avl(&self) -> bool {
        is_avl(&self.root)
    }
}

fn insert<E>(link: &mut Link<E>, value: E)
where
    E: Ord,
{
    match link {
        // Found the empty spot for the new leaf.
        None => *link = Some(Box::new(Node::new(value))),
        Some(node) => {
            match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value),
                Ordering::Greater => insert(&mut node.right, value),
                // A duplicate; drop it without touching the subtree.
                Ordering::Equal => return,
            }
            // A leaf may have been attached below. Re-establish the
            // height invariant before returning up the call chain.
            node.update_height();
        }
    }
}

fn push_in_order<'a, E>(link: &'a Link<E>, out: &mut Vec<&'a E>) {
    if let Some(node) = link {
        push_in_order(&node.left, out);
        out.push(&node.value);
        push_in_order(&node.right, out);
    }
}

fn sum_depths<E>(link: &Link<E>, depth: i64) -> i64 {
    match link {
        None => -1,
        Some(node) => {
            depth + sum_depths(&node.left, depth + 1) + sum_depths(&node.right, depth + 1)
        }
    }
}

fn push_two_level<'a, E>(link: &'a Link<E>, out: &mut Vec<&'a E>) {
    if let Some(node) = link {
        if balance_factor(link) == 2 {
            out.push(&node.value);
        }
        push_two_level(&node.left, out);
        push_two_level(&node.right, out);
    }
}

fn is_bst<E>(link: &Link<E>, min: Option<&E>, max: Option<&E>) -> bool
where
    E: Ord,
{
    match link {
        None => true,
        Some(node) => {
            if let Some(max) = max {
                if node.value >= *max {
                    return false;
                }
            }
            if let Some(min) = min {
                if node.value <= *min {
                    return false;
                }
            }
            // Going left tightens the upper bound, going right the lower.
            is_bst(&node.left, min, Some(&node.value))
                && is_bst(&node.right, Some(&node.value), max)
        }
    }
}

fn is_avl<E>(link: &Link<E>) -> bool {
    match link {
        None => true,
        Some(node) => {
            let balance = balance_factor(link);
            if !(-1..=1).contains(&balance) {
                return false;
            }
            is_avl(&node.left) && is_avl(&node.right)
        }
    }
}
