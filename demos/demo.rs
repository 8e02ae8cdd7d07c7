//! Walks through every tree operation in a fixed sequence and prints the
//! result of each step. Run with `cargo run --example demo`.

use bintree::tree::Tree;

fn main() {
    let mut bst: Tree = [100, 248, 76, 74, 178, 278].iter().copied().collect();

    println!("6 node tree");
    println!("{}", bst);

    println!();
    println!("Mirror of original tree (flipped in place)");
    bst.mirror();
    println!("{}", bst);

    println!();
    println!("Mirror the mirrored tree. Generate a new tree");
    let orig = bst.mirrored();
    println!("{}", orig);
    println!("orig.same(&bst) = {}. Expected result: false", orig.same(&bst));

    let fresh: Tree = [100, 248, 76, 74, 178, 278].iter().copied().collect();
    println!(
        "orig.same(&fresh) = {}. Expected result: true",
        orig.same(&fresh)
    );

    println!();
    println!("Double each node");
    let mut doubled = orig.clone();
    doubled.double();
    println!("{}", doubled);

    println!();
    println!("Is Binary Search Tree");
    println!(
        "bst.is_binary_search_tree():     {:5}. Expected: false",
        bst.is_binary_search_tree()
    );
    println!(
        "orig.is_binary_search_tree():    {:5}. Expected: true",
        orig.is_binary_search_tree()
    );
    println!(
        "doubled.is_binary_search_tree(): {:5}. Expected: true",
        doubled.is_binary_search_tree()
    );
}
