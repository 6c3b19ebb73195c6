use std::cmp::Ordering;

use crate::step::StepLog;

/// Heap sort over an in-place max-heap.  One snapshot per swap, both while
/// heapifying (build and extraction phases) and for each root-extraction
/// swap itself.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, &mut compare, steps);
    }
    for i in (1..n).rev() {
        arr.swap(0, i);
        steps.push(arr.to_vec());
        sift_down(arr, i, 0, &mut compare, steps);
    }
}

/// Iterative sift-down of `arr[i]` within the heap prefix `arr[..n]`.
fn sift_down<T, F>(arr: &mut [T], n: usize, mut i: usize, compare: &mut F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut largest = i;
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        if l < n && compare(&arr[l], &arr[largest]) == Ordering::Greater {
            largest = l;
        }
        if r < n && compare(&arr[r], &arr[largest]) == Ordering::Greater {
            largest = r;
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        steps.push(arr.to_vec());
        i = largest;
    }
}
