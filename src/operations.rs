use crate::error::{Result, TrackvizError};
use crate::tracked::TrackedArray;
use crate::types::Trace;
use std::fmt;
use std::str::FromStr;

/// Array used when a run does not supply its own.
pub const DEFAULT_ARRAY: [i32; 6] = [5, 2, 8, 1, 9, 3];

const ACCESS_INDEX: usize = 2;
const INSERT_INDEX: usize = 2;
const INSERT_VALUE: i32 = 99;
const DELETE_INDEX: usize = 1;
const SEARCH_TARGET: i32 = 8;

/// Built-in routines that drive a [`TrackedArray`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Access,
    Insert,
    Delete,
    Search,
    Reverse,
    BubbleSort,
    SelectionSort,
    InsertionSort,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Access,
        Operation::Insert,
        Operation::Delete,
        Operation::Search,
        Operation::Reverse,
        Operation::BubbleSort,
        Operation::SelectionSort,
        Operation::InsertionSort,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Operation::Access => "access",
            Operation::Insert => "insert",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Reverse => "reverse",
            Operation::BubbleSort => "bubble_sort",
            Operation::SelectionSort => "selection_sort",
            Operation::InsertionSort => "insertion_sort",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Access => "Access by Index",
            Operation::Insert => "Insert at Index",
            Operation::Delete => "Delete at Index",
            Operation::Search => "Linear Search",
            Operation::Reverse => "Reverse Array",
            Operation::BubbleSort => "Bubble Sort",
            Operation::SelectionSort => "Selection Sort",
            Operation::InsertionSort => "Insertion Sort",
        }
    }

    pub fn run(&self, arr: &mut TrackedArray) {
        match self {
            Operation::Access => {
                let value = arr.get(ACCESS_INDEX);
                log::debug!("arr[{}] = {}", ACCESS_INDEX, value);
            }
            Operation::Insert => arr.insert(INSERT_INDEX, INSERT_VALUE),
            Operation::Delete => arr.erase(DELETE_INDEX),
            Operation::Search => {
                let found = Self::search(arr, SEARCH_TARGET);
                log::debug!("search for {} found {:?}", SEARCH_TARGET, found);
            }
            Operation::Reverse => Self::reverse(arr),
            Operation::BubbleSort => Self::bubble_sort(arr),
            Operation::SelectionSort => Self::selection_sort(arr),
            Operation::InsertionSort => Self::insertion_sort(arr),
        }
    }

    /// Index of the first element equal to `target`.
    pub fn search(arr: &TrackedArray, target: i32) -> Option<usize> {
        (0..arr.len()).find(|&i| arr.get(i) == target)
    }

    fn reverse(arr: &mut TrackedArray) {
        if arr.is_empty() {
            return;
        }
        let (mut left, mut right) = (0, arr.len() - 1);
        while left < right {
            arr.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    fn bubble_sort(arr: &mut TrackedArray) {
        let n = arr.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                if arr.get(j) > arr.get(j + 1) {
                    arr.swap(j, j + 1);
                }
            }
        }
    }

    /// Swaps once per pass, even when the minimum is already in place.
    fn selection_sort(arr: &mut TrackedArray) {
        let n = arr.len();
        for i in 0..n {
            let mut min_idx = i;
            for j in i + 1..n {
                if arr.get(j) < arr.get(min_idx) {
                    min_idx = j;
                }
            }
            arr.swap(i, min_idx);
        }
    }

    /// Shifts with `set` rather than `swap`, then drops the key into the gap.
    fn insertion_sort(arr: &mut TrackedArray) {
        for i in 1..arr.len() {
            let key = arr.get(i);
            let mut j = i;
            while j > 0 && arr.get(j - 1) > key {
                arr.set(j, arr.get(j - 1));
                j -= 1;
            }
            arr.set(j, key);
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = TrackvizError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.id() == s)
            .ok_or_else(|| TrackvizError::UnknownOperation(s.to_string()))
    }
}

/// Run `op` on a fresh tracked copy of `initial` and return the finished trace.
pub fn execute(op: Operation, initial: &[i32]) -> Trace {
    let mut arr = TrackedArray::new(initial);
    op.run(&mut arr);
    arr.finish().clone()
}
