//! Step-recording sorting engine.
//!
//! Each algorithm mutates the sequence in place and commits a full copy to
//! the step log at its own checkpoint granularity (documented per module),
//! so a replay renders exactly the intermediate states the algorithm
//! produced.  Comparison sorts are generic over element and comparator;
//! counting and radix sort are defined for non-negative integers only and
//! reject anything else before touching the data.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;

use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::EngineError;
use crate::step::StepLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// True for the algorithms that preserve the relative order of equal
    /// elements.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Merge | SortAlgorithm::Counting | SortAlgorithm::Radix
        )
    }
}

impl FromStr for SortAlgorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.name() == s.to_ascii_lowercase())
            .ok_or_else(|| EngineError::InvalidInput(format!("unknown sort algorithm: {s}")))
    }
}

/// Outcome of one sorting run: the final sequence, the recorded trace, and
/// the wall-clock cost of the whole recording run (snapshot copies
/// included; they are part of the workload being observed).
#[derive(Debug, Clone, Serialize)]
pub struct SortRun {
    pub algorithm: SortAlgorithm,
    pub sorted: Vec<i64>,
    pub steps: StepLog<Vec<i64>>,
    pub elapsed: Duration,
}

/// Run `algorithm` over an owned copy of the caller's values.
pub fn sort(values: Vec<i64>, algorithm: SortAlgorithm) -> Result<SortRun, EngineError> {
    let mut arr = values;
    let mut steps = StepLog::new();
    let started = Instant::now();
    match algorithm {
        SortAlgorithm::Bubble => bubble::sort_by(&mut arr, i64::cmp, &mut steps),
        SortAlgorithm::Insertion => insertion::sort_by(&mut arr, i64::cmp, &mut steps),
        SortAlgorithm::Merge => merge::sort_by(&mut arr, i64::cmp, &mut steps),
        SortAlgorithm::Quick => quick::sort_by(&mut arr, i64::cmp, &mut steps),
        SortAlgorithm::Heap => heap::sort_by(&mut arr, i64::cmp, &mut steps),
        SortAlgorithm::Counting => counting::sort(&mut arr, &mut steps)?,
        SortAlgorithm::Radix => radix::sort(&mut arr, &mut steps)?,
    }
    let elapsed = started.elapsed();
    Ok(SortRun {
        algorithm,
        sorted: arr,
        steps,
        elapsed,
    })
}
