#[path = "quicktests/tree.rs"]
mod tree;
