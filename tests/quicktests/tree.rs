use bst_engine::{Tree, TreeError};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, in the same order, in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Clone + Ord + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                let _ = bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                let _ = bst.delete(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);

        tree.len() == set.len() && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.search(x) == Ok(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<i8> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).map_err(|e| e.is_not_found()) == Err(true))
    }
}

quickcheck::quickcheck! {
    fn second_insert_is_a_duplicate(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        let before: Vec<_> = tree.iter().copied().collect();

        xs.iter().all(|x| tree.insert(*x) == Err(TreeError::DuplicateKey(*x)))
            && tree.iter().copied().eq(before)
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            let before: Vec<_> = tree.iter().copied().filter(|x| x != delete).collect();
            let was_present = tree.contains(delete);

            if tree.delete(delete).is_ok() != was_present {
                return false;
            }
            // Deleting removes exactly that key and keeps the rest in order.
            if !tree.iter().copied().eq(before) {
                return false;
            }
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}
