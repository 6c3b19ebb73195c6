use std::cmp::Ordering;

use crate::step::StepLog;

/// Bubble sort.  One snapshot per adjacent swap.
///
/// # Examples
///
/// ```
/// use algolab::sort::bubble;
/// use algolab::StepLog;
///
/// let mut arr = vec![5, 3, 8, 1];
/// let mut steps = StepLog::new();
/// bubble::sort_by(&mut arr, i64::cmp, &mut steps);
/// assert_eq!(arr, vec![1, 3, 5, 8]);
/// assert_eq!(steps.len(), 4);
/// ```
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if compare(&arr[j], &arr[j + 1]) == Ordering::Greater {
                arr.swap(j, j + 1);
                steps.push(arr.to_vec());
            }
        }
    }
}
