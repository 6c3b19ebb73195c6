use std::cmp::Ordering;

use crate::step::StepLog;

/// Insertion sort.  One snapshot per shift while the gap walks left, plus
/// one snapshot when the key lands (taken even when nothing shifted).
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let key = arr[i].clone();
        let mut j = i;
        while j > 0 && compare(&key, &arr[j - 1]) == Ordering::Less {
            arr[j] = arr[j - 1].clone();
            j -= 1;
            steps.push(arr.to_vec());
        }
        arr[j] = key;
        steps.push(arr.to_vec());
    }
}
