use step_forest::avl::Avl;
use step_forest::types::Node;

#[test]
fn avl_balanced_insert_sequence_never_rotates() {
    // Inserted in this order the tree is balanced at every step, so the
    // final shape is exactly the insertion shape.
    let mut tree = Avl::<i64>::new();
    let idx: Vec<u32> = [50, 30, 70, 20, 40, 60, 80]
        .into_iter()
        .map(|k| {
            let i = tree.insert(k);
            tree.assert_valid().unwrap();
            i
        })
        .collect();

    assert_eq!(tree.root_index(), Some(idx[0]));
    assert_eq!(tree.node(idx[0]).l(), Some(idx[1]));
    assert_eq!(tree.node(idx[0]).r(), Some(idx[2]));
    assert_eq!(tree.node(idx[1]).l(), Some(idx[3]));
    assert_eq!(tree.node(idx[1]).r(), Some(idx[4]));
    assert_eq!(tree.node(idx[2]).l(), Some(idx[5]));
    assert_eq!(tree.node(idx[2]).r(), Some(idx[6]));
    assert_eq!(tree.height(), 3);

    let keys: Vec<i64> = tree.inorder().copied().collect();
    assert_eq!(keys, vec![20, 30, 40, 50, 60, 70, 80]);
}

#[test]
fn avl_single_and_double_rotations_on_insert() {
    // Right-right lean, single left rotation.
    let mut tree = Avl::<i64>::new();
    for k in [10, 20, 30] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    assert_eq!(*tree.key(tree.root_index().unwrap()), 20);
    assert_eq!(tree.height(), 2);

    // Left-left lean, single right rotation.
    let mut tree = Avl::<i64>::new();
    for k in [30, 20, 10] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    assert_eq!(*tree.key(tree.root_index().unwrap()), 20);

    // Left-right, double rotation.
    let mut tree = Avl::<i64>::new();
    for k in [30, 10, 20] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    assert_eq!(*tree.key(tree.root_index().unwrap()), 20);

    // Right-left, double rotation.
    let mut tree = Avl::<i64>::new();
    for k in [10, 30, 20] {
        tree.insert(k);
    }
    tree.assert_valid().unwrap();
    assert_eq!(*tree.key(tree.root_index().unwrap()), 20);
}

#[test]
fn avl_ladder_insert_stays_shallow() {
    let mut tree = Avl::<i64>::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    assert!(tree.height() <= 12, "height {} too deep", tree.height());

    let keys: Vec<i64> = tree.inorder().copied().collect();
    let expected: Vec<i64> = (0..300).collect();
    assert_eq!(keys, expected);
}

#[test]
fn avl_delete_rebalances_bottom_up() {
    let mut tree = Avl::<i64>::new();
    for i in 0..300 {
        tree.insert(i);
    }
    for i in (0..300).step_by(3) {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }

    // Drain the rest; every intermediate tree must stay balanced.
    for i in 0..300 {
        if i % 3 != 0 {
            assert!(tree.delete(&i));
            tree.assert_valid().unwrap();
        }
    }
    assert!(tree.is_empty());
}

#[test]
fn avl_delete_two_children_uses_successor_key() {
    let mut tree = Avl::<i64>::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(k);
    }
    let root = tree.root_index().unwrap();
    assert!(tree.delete(&50));
    tree.assert_valid().unwrap();
    assert_eq!(tree.root_index(), Some(root));
    assert_eq!(*tree.key(root), 60);
}

#[test]
fn avl_duplicates_keep_non_decreasing_order() {
    let mut tree = Avl::<i64>::new();
    for k in [7, 7, 3, 7, 3] {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    let keys: Vec<i64> = tree.inorder().copied().collect();
    assert_eq!(keys, vec![3, 3, 7, 7, 7]);
}

/// Minimal deterministic PRNG for the op-storm test.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn avl_random_op_storm_keeps_the_balance() {
    for seed in [1u64, 0xc0ffee, 0x5eed] {
        let mut rng = Lcg::new(seed);
        let mut tree = Avl::<i64>::new();
        let mut live: Vec<i64> = Vec::new();

        for _ in 0..400 {
            let key = (rng.next() % 64) as i64;
            if rng.next() % 3 == 0 {
                if tree.delete(&key) {
                    let pos = live.iter().position(|&k| k == key).unwrap();
                    live.remove(pos);
                }
            } else {
                tree.insert(key);
                live.push(key);
            }
            tree.assert_valid().unwrap();
        }

        assert_eq!(tree.size(), live.len());
        live.sort_unstable();
        assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), live);
    }
}

#[test]
fn avl_delete_missing_is_a_no_op() {
    let mut tree = Avl::<i64>::new();
    for k in [2, 1, 3] {
        tree.insert(k);
    }
    assert!(!tree.delete(&42));
    assert_eq!(tree.size(), 3);
    tree.assert_valid().unwrap();
}
