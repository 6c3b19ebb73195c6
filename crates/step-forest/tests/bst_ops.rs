use step_forest::bst::Bst;
use step_forest::types::Node;

#[test]
fn bst_insert_keeps_order() {
    let mut tree = Bst::<i64>::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 7);
    let keys: Vec<i64> = tree.inorder().copied().collect();
    assert_eq!(keys, vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn bst_duplicates_route_right() {
    let mut tree = Bst::<i64>::new();
    let root = tree.insert(5);
    let second = tree.insert(5);
    let third = tree.insert(5);
    tree.assert_valid().unwrap();

    assert_eq!(tree.size(), 3);
    assert_eq!(tree.root_index(), Some(root));
    assert_eq!(tree.node(root).r(), Some(second));
    assert_eq!(tree.node(second).r(), Some(third));
    let keys: Vec<i64> = tree.inorder().copied().collect();
    assert_eq!(keys, vec![5, 5, 5]);
}

#[test]
fn bst_delete_leaf_one_child_two_children() {
    let mut tree = Bst::<i64>::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
    }

    // Leaf.
    assert!(tree.delete(&20));
    tree.assert_valid().unwrap();
    assert_eq!(
        tree.inorder().copied().collect::<Vec<_>>(),
        vec![30, 40, 50, 60, 70, 80]
    );

    // One child: 30 keeps only 40 after the leaf went away.
    assert!(tree.delete(&30));
    tree.assert_valid().unwrap();
    assert_eq!(
        tree.inorder().copied().collect::<Vec<_>>(),
        vec![40, 50, 60, 70, 80]
    );

    // Two children: the root receives its in-order successor's key.
    assert!(tree.delete(&50));
    tree.assert_valid().unwrap();
    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 60);
    assert_eq!(
        tree.inorder().copied().collect::<Vec<_>>(),
        vec![40, 60, 70, 80]
    );
}

#[test]
fn bst_delete_missing_is_a_no_op() {
    let mut tree = Bst::<i64>::new();
    for k in [2, 1, 3] {
        tree.insert(k);
    }
    assert!(!tree.delete(&99));
    assert_eq!(tree.size(), 3);
    tree.assert_valid().unwrap();
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn bst_delete_down_to_empty() {
    let mut tree = Bst::<i64>::new();
    for k in [2, 1, 3] {
        tree.insert(k);
    }
    for k in [2, 1, 3] {
        assert!(tree.delete(&k));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert_eq!(tree.inorder().count(), 0);
}

#[test]
fn bst_ladder_insert_delete() {
    let mut tree = Bst::<i64>::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);

    for i in (0..300).step_by(3) {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
}
