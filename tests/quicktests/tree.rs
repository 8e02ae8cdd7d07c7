use bintree::tree::Tree;

use quickcheck_macros::quickcheck;

/// Builds a tree by inserting each value in order. `i8` keeps the value
/// domain small so random vectors actually contain duplicates.
fn build(xs: &[i8]) -> Tree {
    xs.iter().map(|&x| i32::from(x)).collect()
}

#[quickcheck]
fn inserted_trees_validate(xs: Vec<i8>) -> bool {
    build(&xs).is_binary_search_tree()
}

#[quickcheck]
fn len_counts_insertions(xs: Vec<i8>) -> bool {
    build(&xs).len() == xs.len()
}

#[quickcheck]
fn same_is_reflexive(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.same(&tree)
}

#[quickcheck]
fn same_is_symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a = build(&xs);
    let b = build(&ys);
    a.same(&b) == b.same(&a)
}

#[quickcheck]
fn serialization_characterizes_structure(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a = build(&xs);
    let b = build(&ys);
    // The parenthesized form is unambiguous, so string equality and
    // structural equality coincide.
    a.same(&b) == (a.to_string() == b.to_string())
}

#[quickcheck]
fn mirrored_twice_is_identity(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.mirrored().mirrored() == tree
}

#[quickcheck]
fn mirror_in_place_twice_is_identity(xs: Vec<i8>) -> bool {
    let original = build(&xs);
    let mut tree = original.clone();
    tree.mirror();
    tree.mirror();
    tree == original
}

#[quickcheck]
fn mirror_in_place_agrees_with_copy_mirror(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut in_place = tree.clone();
    in_place.mirror();
    in_place == tree.mirrored()
}

#[quickcheck]
fn copy_mirror_does_not_touch_source(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let before = tree.to_string();
    let _flipped = tree.mirrored();
    tree.to_string() == before
}

#[quickcheck]
fn double_doubles_len_and_stays_valid(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let len = tree.len();
    tree.double();
    // Duplicates descend left, so doubling keeps the ordering rule intact.
    tree.len() == 2 * len && tree.is_binary_search_tree()
}
