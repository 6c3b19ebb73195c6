//! Literal step traces on small fixed inputs: the recorded snapshots are
//! the product being shipped, so their exact contents are pinned here.

use algolab::sort::{self, SortAlgorithm};

fn steps_of(values: &[i64], algorithm: SortAlgorithm) -> (Vec<i64>, Vec<Vec<i64>>) {
    let run = sort::sort(values.to_vec(), algorithm).unwrap();
    (run.sorted, run.steps.entries().to_vec())
}

#[test]
fn bubble_trace_on_5_3_8_1() {
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Bubble);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![3, 5, 8, 1],
            vec![3, 5, 1, 8],
            vec![3, 1, 5, 8],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn insertion_trace_on_5_3_8_1() {
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Insertion);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![5, 5, 8, 1],
            vec![3, 5, 8, 1],
            vec![3, 5, 8, 1],
            vec![3, 5, 8, 8],
            vec![3, 5, 5, 8],
            vec![3, 3, 5, 8],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn merge_trace_on_5_3_8_1() {
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Merge);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![3, 3, 8, 1],
            vec![3, 5, 8, 1],
            vec![3, 5, 1, 1],
            vec![3, 5, 1, 8],
            vec![1, 5, 1, 8],
            vec![1, 3, 1, 8],
            vec![1, 3, 5, 8],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn quick_trace_on_5_3_8_1() {
    // Pivot 1 sends everything right; the second partition records a
    // self-swap checkpoint before placing pivot 5.
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Quick);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![1, 3, 8, 5],
            vec![1, 3, 8, 5],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn heap_trace_on_5_3_8_1() {
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Heap);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![8, 3, 5, 1],
            vec![1, 3, 5, 8],
            vec![5, 3, 1, 8],
            vec![1, 3, 5, 8],
            vec![3, 1, 5, 8],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn counting_trace_on_5_3_8_1() {
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Counting);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![1, 3, 8, 1],
            vec![1, 3, 8, 1],
            vec![1, 3, 5, 1],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn radix_trace_on_5_3_8_1() {
    // Single digit position, so one stable pass writes the result back.
    let (sorted, steps) = steps_of(&[5, 3, 8, 1], SortAlgorithm::Radix);
    assert_eq!(sorted, vec![1, 3, 5, 8]);
    assert_eq!(
        steps,
        vec![
            vec![1, 3, 8, 1],
            vec![1, 3, 8, 1],
            vec![1, 3, 5, 1],
            vec![1, 3, 5, 8],
        ]
    );
}

#[test]
fn radix_walks_every_digit_position() {
    let values = [170, 45, 75, 90, 802, 24, 2, 66];
    let (sorted, steps) = steps_of(&values, SortAlgorithm::Radix);
    assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    // Three digit passes, one write-back snapshot per element per pass.
    assert_eq!(steps.len(), 3 * values.len());
}

#[test]
fn empty_and_single_element_inputs_succeed() {
    for algorithm in SortAlgorithm::ALL {
        let run = sort::sort(Vec::new(), algorithm).unwrap();
        assert!(run.sorted.is_empty());
        assert!(run.steps.is_empty(), "{algorithm:?} stepped on empty input");

        let run = sort::sort(vec![7], algorithm).unwrap();
        assert_eq!(run.sorted, vec![7]);
    }
}

#[test]
fn counting_and_radix_reject_negative_values() {
    use algolab::EngineError;

    for algorithm in [SortAlgorithm::Counting, SortAlgorithm::Radix] {
        let err = sort::sort(vec![3, -1, 2], algorithm).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedOperation(_)));
    }
}

#[test]
fn algorithm_names_round_trip() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.name().parse::<SortAlgorithm>().unwrap(), algorithm);
    }
    assert!("bogo".parse::<SortAlgorithm>().is_err());
}
