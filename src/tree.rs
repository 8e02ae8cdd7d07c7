//! A binary tree with recursive structural operations. Insertion follows
//! the Binary Search Tree ordering rule (ties descend left), and the rest
//! of the operations manipulate or inspect the structure itself: a
//! parenthesized string form, in-place and copying mirrors, structural
//! equality, node doubling, and BST validation.
//!
//! # Examples
//!
//! ```
//! use bintree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet: the empty tree renders as the empty token.
//! assert_eq!(tree.to_string(), "E");
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.to_string(), "(2 (1 E E) (3 E E))");
//! assert!(tree.is_binary_search_tree());
//!
//! // A copy mirror leaves the original untouched...
//! let mut flipped = tree.mirrored();
//! assert_eq!(flipped.to_string(), "(2 (3 E E) (1 E E))");
//! assert_eq!(tree.to_string(), "(2 (1 E E) (3 E E))");
//!
//! // ...and mirroring the mirror in place brings the shape back.
//! flipped.mirror();
//! assert!(tree.same(&flipped));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// A binary tree storing integer values. The empty case is an explicit
/// variant so every recursive operation matches it exhaustively instead of
/// testing a nullable pointer.
#[derive(Clone, Debug)]
pub enum Tree {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` with a value and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node),
}

/// A `Node` has an integer value and always has two children, although
/// those children may be [`Leaf`][Tree::Leaf]s. Each child is exclusively
/// owned: subtrees are never shared between parents.
#[derive(Clone, Debug)]
pub struct Node {
    value: i32,
    left: Box<Tree>,
    right: Box<Tree>,
}

impl Node {
    fn new(value: i32) -> Self {
        Self {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree::Leaf
    }

    /// Inserts the given value, keeping the search-tree ordering rule:
    /// values less than or equal to a node descend into its left subtree,
    /// strictly greater values into its right subtree, until an empty slot
    /// is found. Exactly one new node is created per call.
    ///
    /// Note that ties go left. [`is_binary_search_tree`][Self::is_binary_search_tree]
    /// validates the same rule, so inserted trees always pass it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(100);
    /// tree.insert(248);
    /// tree.insert(76);
    ///
    /// assert_eq!(tree.to_string(), "(100 (76 E E) (248 E E))");
    /// ```
    pub fn insert(&mut self, value: i32) {
        match self {
            Tree::Leaf => *self = Tree::Node(Node::new(value)),
            Tree::Node(n) => {
                if value <= n.value {
                    n.left.insert(value);
                } else {
                    n.right.insert(value);
                }
            }
        }
    }

    /// Mirrors the tree in place: every node's left and right subtrees are
    /// swapped, recursively (children are mirrored before the swap at each
    /// node). The nodes themselves are reused, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].iter().copied().collect();
    /// tree.mirror();
    ///
    /// assert_eq!(tree.to_string(), "(2 (3 E E) (1 E E))");
    ///
    /// // Mirroring twice restores the original shape.
    /// tree.mirror();
    /// assert_eq!(tree.to_string(), "(2 (1 E E) (3 E E))");
    /// ```
    pub fn mirror(&mut self) {
        if let Tree::Node(n) = self {
            n.left.mirror();
            n.right.mirror();
            mem::swap(&mut n.left, &mut n.right);
        }
    }

    /// Returns a new tree that is the mirror image of this one, leaving
    /// this tree untouched. Every node is freshly allocated: the input and
    /// the result share no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let tree: Tree = [1, 2].iter().copied().collect();
    /// let flipped = tree.mirrored();
    ///
    /// assert_eq!(flipped.to_string(), "(1 (2 E E) E)");
    /// assert_eq!(tree.to_string(), "(1 E (2 E E))");
    /// ```
    pub fn mirrored(&self) -> Self {
        match self {
            Tree::Leaf => Tree::Leaf,
            Tree::Node(n) => Tree::Node(Node {
                value: n.value,
                left: Box::new(n.right.mirrored()),
                right: Box::new(n.left.mirrored()),
            }),
        }
    }

    /// Returns true iff the two trees are structurally identical: the same
    /// shape with equal values at corresponding positions. Also available
    /// through `==` since [`Tree`] implements `PartialEq` in terms of this.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// // Different insertion orders can still build the same tree.
    /// let a: Tree = [2, 1, 3].iter().copied().collect();
    /// let b: Tree = [2, 3, 1].iter().copied().collect();
    /// assert!(a.same(&b));
    ///
    /// // Equal value sets in a different shape are not the same tree.
    /// let c: Tree = [1, 2, 3].iter().copied().collect();
    /// assert!(!a.same(&c));
    /// ```
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Tree::Leaf, Tree::Leaf) => true,
            (Tree::Node(a), Tree::Node(b)) => {
                a.value == b.value && a.left.same(&b.left) && a.right.same(&b.right)
            }
            _ => false,
        }
    }

    /// Doubles the tree in place: every original node gains a newly created
    /// left child carrying the same value, and that duplicate adopts the
    /// node's previous left subtree. Right subtrees are untouched at each
    /// level. Subtrees are doubled before their root so every original node
    /// is duplicated exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].iter().copied().collect();
    /// tree.double();
    ///
    /// assert_eq!(tree.len(), 6);
    /// assert_eq!(tree.to_string(), "(2 (2 (1 (1 E E) E) E) (3 (3 E E) E))");
    /// ```
    pub fn double(&mut self) {
        if let Tree::Node(n) = self {
            n.left.double();
            n.right.double();

            let left = mem::replace(&mut n.left, Box::new(Tree::Leaf));
            n.left = Box::new(Tree::Node(Node {
                value: n.value,
                left,
                right: Box::new(Tree::Leaf),
            }));
        }
    }

    /// Returns true iff every node's left subtree holds only values less
    /// than or equal to the node's value and its right subtree only
    /// strictly greater values, transitively across the whole tree. This is
    /// the exact rule [`insert`][Self::insert] maintains.
    ///
    /// Checked by carrying an open lower and closed upper bound down each
    /// recursive call, so the whole validation is a single `O(n)` walk and
    /// no sentinel minimum or maximum value is assumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let mut tree: Tree = [100, 248, 76, 74, 178, 278].iter().copied().collect();
    /// assert!(tree.is_binary_search_tree());
    ///
    /// tree.mirror();
    /// assert!(!tree.is_binary_search_tree());
    /// ```
    pub fn is_binary_search_tree(&self) -> bool {
        self.in_bounds(None, None)
    }

    /// `low` is exclusive, `high` is inclusive, matching the ties-go-left
    /// insertion rule. `None` means unbounded on that side.
    fn in_bounds(&self, low: Option<i32>, high: Option<i32>) -> bool {
        match self {
            Tree::Leaf => true,
            Tree::Node(n) => {
                if let Some(low) = low {
                    if n.value <= low {
                        return false;
                    }
                }
                if let Some(high) = high {
                    if n.value > high {
                        return false;
                    }
                }

                n.left.in_bounds(low, Some(n.value)) && n.right.in_bounds(Some(n.value), high)
            }
        }
    }

    /// Returns the number of nodes in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::tree::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].iter().copied().collect();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        match self {
            Tree::Leaf => 0,
            Tree::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Returns true iff the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Leaf)
    }
}

/// Renders the tree in its fully parenthesized form: an empty subtree is
/// the token `E` and a node is `(value left right)`, recursively, with
/// single spaces in between. The format is deterministic, so two trees are
/// structurally identical iff their renderings are equal.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf => f.write_str("E"),
            Tree::Node(n) => write!(f, "({} {} {})", n.value, n.left, n.right),
        }
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Tree {}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(values);
        tree
    }
}
