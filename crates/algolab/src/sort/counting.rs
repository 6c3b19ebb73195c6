use crate::error::EngineError;
use crate::step::StepLog;

/// Counting sort, defined for non-negative integers only.  One snapshot per
/// output element placed.  Stable by construction for bare integers: equal
/// values are indistinguishable and emitted as a block.
///
/// Negative values are rejected before the sequence is touched; an empty
/// sequence succeeds with an empty trace.
pub fn sort(arr: &mut [i64], steps: &mut StepLog<Vec<i64>>) -> Result<(), EngineError> {
    if arr.is_empty() {
        return Ok(());
    }
    if let Some(&bad) = arr.iter().find(|&&v| v < 0) {
        return Err(EngineError::UnsupportedOperation(format!(
            "counting sort requires non-negative integers, got {bad}"
        )));
    }

    let max = *arr.iter().max().expect("sequence is non-empty");
    let mut count = vec![0usize; max as usize + 1];
    for &v in arr.iter() {
        count[v as usize] += 1;
    }

    let mut i = 0;
    for (value, &c) in count.iter().enumerate() {
        for _ in 0..c {
            arr[i] = value as i64;
            i += 1;
            steps.push(arr.to_vec());
        }
    }
    Ok(())
}
