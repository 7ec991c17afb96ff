//! This crate exposes a persistent Binary Search Tree (BST) whose ordering
//! is a caller-supplied function rather than a fixed trait bound.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! will sometimes have child `Node`s. Here the ordering between values is
//! a "comes before" function chosen by the caller when the tree is
//! created, and the most important invariants are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree
//!    have a value that comes before its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree
//!    have a value that does *not* come before its own value. Values equal
//!    under the ordering land on the right, so inserting a value twice
//!    stores it twice.
//!
//! > Note that two values are considered equal exactly when neither comes
//! > before the other. Equality is derived from the ordering, never from
//! > `Eq`.
//!
//! Searching the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). Nothing here
//! rebalances, so the height depends entirely on insertion order:
//! inserting already-sorted values degrades the tree to a chain of length
//! `N`, while random insertion orders keep the expected height near
//! `O(lg N)`. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod functional;
