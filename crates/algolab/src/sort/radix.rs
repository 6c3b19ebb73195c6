use crate::error::EngineError;
use crate::step::StepLog;

/// LSD radix sort, base 10, defined for non-negative integers only.  Each
/// digit position runs a stable counting pass; one snapshot per element
/// written back from the pass's output array.
///
/// Negative values are rejected before the sequence is touched; an empty
/// sequence succeeds with an empty trace.
pub fn sort(arr: &mut [i64], steps: &mut StepLog<Vec<i64>>) -> Result<(), EngineError> {
    if arr.is_empty() {
        return Ok(());
    }
    if let Some(&bad) = arr.iter().find(|&&v| v < 0) {
        return Err(EngineError::UnsupportedOperation(format!(
            "radix sort requires non-negative integers, got {bad}"
        )));
    }

    let max = *arr.iter().max().expect("sequence is non-empty");
    let mut exp: i64 = 1;
    while max / exp > 0 {
        counting_pass(arr, exp, steps);
        exp = exp.saturating_mul(10);
    }
    Ok(())
}

/// One stable counting pass over the digit at `exp`.
fn counting_pass(arr: &mut [i64], exp: i64, steps: &mut StepLog<Vec<i64>>) {
    let n = arr.len();
    let mut output = vec![0i64; n];
    let mut count = [0usize; 10];

    for &v in arr.iter() {
        count[((v / exp) % 10) as usize] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    // Walk backwards so equal digits keep their relative order.
    for &v in arr.iter().rev() {
        let d = ((v / exp) % 10) as usize;
        count[d] -= 1;
        output[count[d]] = v;
    }

    for i in 0..n {
        arr[i] = output[i];
        steps.push(arr.to_vec());
    }
}
