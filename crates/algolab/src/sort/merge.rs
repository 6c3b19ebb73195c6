use std::cmp::Ordering;

use crate::step::StepLog;

enum Frame {
    Split(usize, usize),
    Merge(usize, usize, usize),
}

/// Top-down merge sort, stable.  One snapshot per element written during a
/// merge, through both the interleave phase and the leftover drains.
///
/// The divide phase runs on an explicit frame stack; left halves are fully
/// merged before their right siblings, so the trace reads like the textbook
/// recursion.
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F, steps: &mut StepLog<Vec<T>>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    let mut stack = vec![Frame::Split(0, n - 1)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Split(l, r) => {
                if l < r {
                    let m = (l + r) / 2;
                    stack.push(Frame::Merge(l, m, r));
                    stack.push(Frame::Split(m + 1, r));
                    stack.push(Frame::Split(l, m));
                }
            }
            Frame::Merge(l, m, r) => merge(arr, l, m, r, &mut compare, steps),
        }
    }
}

fn merge<T, F>(
    arr: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    compare: &mut F,
    steps: &mut StepLog<Vec<T>>,
) where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left: Vec<T> = arr[l..=m].to_vec();
    let right: Vec<T> = arr[m + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements in left-then-right order: stability.
        if compare(&left[i], &right[j]) != Ordering::Greater {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
        steps.push(arr.to_vec());
    }
    while i < left.len() {
        arr[k] = left[i].clone();
        i += 1;
        k += 1;
        steps.push(arr.to_vec());
    }
    while j < right.len() {
        arr[k] = right[j].clone();
        j += 1;
        k += 1;
        steps.push(arr.to_vec());
    }
}
