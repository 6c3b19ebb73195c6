use step_forest::red_black::{Color, RbTree};
use step_forest::types::Node;

#[test]
fn rb_first_insert_is_black_root_rest_red() {
    let mut tree = RbTree::<i64>::new();
    let root = tree.insert(10);
    assert_eq!(tree.color(root), Color::Black);

    let left = tree.insert(5);
    let right = tree.insert(15);
    assert_eq!(tree.color(left), Color::Red);
    assert_eq!(tree.color(right), Color::Red);
    assert_eq!(tree.node(root).l(), Some(left));
    assert_eq!(tree.node(root).r(), Some(right));
    tree.assert_valid().unwrap();
}

#[test]
fn rb_insert_never_restructures() {
    // Ascending inserts degenerate into a right spine: the color tags are
    // cosmetic and no rotation ever runs.
    let mut tree = RbTree::<i64>::new();
    let idx: Vec<u32> = (1..=8).map(|k| tree.insert(k)).collect();
    tree.assert_valid().unwrap();

    assert_eq!(tree.root_index(), Some(idx[0]));
    for w in idx.windows(2) {
        assert_eq!(tree.node(w[0]).r(), Some(w[1]));
        assert_eq!(tree.node(w[0]).l(), None);
    }
    // Red-red parent/child pairs exist on the spine; that is the documented
    // insert-only behavior.
    assert_eq!(tree.color(idx[1]), Color::Red);
    assert_eq!(tree.color(idx[2]), Color::Red);
}

#[test]
fn rb_inorder_is_sorted() {
    let mut tree = RbTree::<i64>::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
    }
    let keys: Vec<i64> = tree.inorder().copied().collect();
    assert_eq!(keys, vec![20, 30, 40, 50, 60, 70, 80]);
}
