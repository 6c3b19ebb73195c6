use std::cmp::Ordering;

use crate::step::StepLog;

/// Quick sort with Lomuto partitioning, last element as pivot.  One
/// snapshot per swap during partitioning (an element swapping with itself
/// still marks a comparison checkpoint) and one for the pivot-placing swap.
///
/// Ranges are processed from an explicit stack, left partition first.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    let mut stack = vec![(0usize, n - 1)];
    while let Some((low, high)) = stack.pop() {
        let pivot = partition(arr, low, high, &mut compare, steps);
        if pivot + 1 < high {
            stack.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            stack.push((low, pivot - 1));
        }
    }
}

fn partition<T, F>(
    arr: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
    steps: &mut StepLog<Vec<T>>,
) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = low;
    for j in low..high {
        if compare(&arr[j], &arr[high]) != Ordering::Greater {
            arr.swap(i, j);
            steps.push(arr.to_vec());
            i += 1;
        }
    }
    arr.swap(i, high);
    steps.push(arr.to_vec());
    i
}
