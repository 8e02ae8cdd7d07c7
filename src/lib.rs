//! This crate implements a small binary tree (in the Binary Search Tree
//! style) together with a handful of recursive structural operations,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is typically defined recursively using the notion
//! of a `Node`. Each `Node` here stores an integer value and owns up to two
//! child subtrees. The invariants maintained by insertion are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than *or equal to* its own value (ties descend left).
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`Tree::is_binary_search_tree`] checks exactly the rule above, so a tree
//! built purely by [`Tree::insert`] always validates.
//!
//! Beyond insertion and validation, the tree supports a parenthesized
//! string form (via `Display`), in-place and copying mirrors, structural
//! equality, and node doubling. All operations are plain call-stack
//! recursion: a degenerate spine of `N` nodes costs `O(N)` stack depth,
//! which is acceptable for the teaching scope of this crate.
//!
//! [`Tree::insert`]: tree::Tree::insert
//! [`Tree::is_binary_search_tree`]: tree::Tree::is_binary_search_tree

#![deny(missing_docs)]

pub mod tree;
