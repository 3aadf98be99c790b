//! This crate exposes a plain (non-self-balancing) Binary Search Tree
//! that keeps a cached height on every node and can diagnose its own
//! shape, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure storing a set of ordered
//! values. BSTs are typically defined recursively using the notion of a
//! `Node`. A `Node` stores one value and sometimes has child `Node`s.
//! The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because of these invariants, visiting the left subtree, then the
//! subtree root, then the right subtree yields the stored values in
//! ascending order. Lookups and inserts take `O(height)`, but nothing
//! here limits that height: the tree in this crate never rotates, so an
//! ascending insert sequence degrades it to a linked list.
//!
//! ## Diagnostics
//!
//! Instead of repairing imbalance, [`tree::Tree`] reports on it. It can
//! sum the depths of its nodes, list the nodes whose left subtree has
//! grown exactly two levels taller than their right subtree, verify the
//! global BST ordering invariant, and check whether the current shape
//! would satisfy an AVL tree's balance requirement.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;
