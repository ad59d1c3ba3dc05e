//! Sorting algorithms as step producers.
//!
//! Every algorithm owns the array it sorts and advances one visualizable
//! unit of work per call:
//!
//! ```text
//! Algorithm ──→ Sorter<T> ──next_step()──→ StepEvent  (borrow array())
//!                   │
//!                   └──Steps<Sorter<T>>──→ Step<T>    (copy per step)
//! ```
//!
//! Sorting is total over any `Vec<T: Ord + Clone>`; empty and single-element
//! inputs finish without emitting.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;
mod step;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use step::{Phase, Step, StepEvent, StepProducer, Steps};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Code did not name a known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sorting algorithm '{0}' (expected one of s, i, b, m, q)")]
pub struct UnknownAlgorithm(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Single-character command-line code.
    pub fn code(self) -> char {
        match self {
            Algorithm::Selection => 's',
            Algorithm::Insertion => 'i',
            Algorithm::Bubble => 'b',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
        }
    }

    pub fn from_code(code: char) -> Result<Self, UnknownAlgorithm> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.code() == code)
            .ok_or_else(|| UnknownAlgorithm(code.to_string()))
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Exact number of steps for an input of length `len`, when it does not
    /// depend on the data.
    pub fn step_count(self, len: usize) -> Option<usize> {
        match self {
            Algorithm::Selection | Algorithm::Insertion => Some(len.saturating_sub(1)),
            Algorithm::Bubble => Some(len * len.saturating_sub(1) / 2),
            Algorithm::Merge | Algorithm::Quick => None,
        }
    }

    pub fn sorter<T: Ord + Clone>(self, data: Vec<T>) -> Sorter<T> {
        match self {
            Algorithm::Selection => Sorter::Selection(SelectionSort::new(data)),
            Algorithm::Insertion => Sorter::Insertion(InsertionSort::new(data)),
            Algorithm::Bubble => Sorter::Bubble(BubbleSort::new(data)),
            Algorithm::Merge => Sorter::Merge(MergeSort::new(data)),
            Algorithm::Quick => Sorter::Quick(QuickSort::new(data)),
        }
    }

    /// Lazy sequence of snapshots, one per step.
    pub fn steps<T: Ord + Clone>(self, data: Vec<T>) -> Steps<Sorter<T>> {
        Steps::new(self.sorter(data))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Closed set of step producers, one variant per [`Algorithm`].
#[derive(Debug, Clone)]
pub enum Sorter<T> {
    Selection(SelectionSort<T>),
    Insertion(InsertionSort<T>),
    Bubble(BubbleSort<T>),
    Merge(MergeSort<T>),
    Quick(QuickSort<T>),
}

impl<T> Sorter<T> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Sorter::Selection(_) => Algorithm::Selection,
            Sorter::Insertion(_) => Algorithm::Insertion,
            Sorter::Bubble(_) => Algorithm::Bubble,
            Sorter::Merge(_) => Algorithm::Merge,
            Sorter::Quick(_) => Algorithm::Quick,
        }
    }
}

impl<T: Ord + Clone> StepProducer for Sorter<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        match self {
            Sorter::Selection(sort) => sort.next_step(),
            Sorter::Insertion(sort) => sort.next_step(),
            Sorter::Bubble(sort) => sort.next_step(),
            Sorter::Merge(sort) => sort.next_step(),
            Sorter::Quick(sort) => sort.next_step(),
        }
    }

    fn array(&self) -> &[T] {
        match self {
            Sorter::Selection(sort) => sort.array(),
            Sorter::Insertion(sort) => sort.array(),
            Sorter::Bubble(sort) => sort.array(),
            Sorter::Merge(sort) => sort.array(),
            Sorter::Quick(sort) => sort.array(),
        }
    }

    fn into_array(self) -> Vec<T> {
        match self {
            Sorter::Selection(sort) => sort.into_array(),
            Sorter::Insertion(sort) => sort.into_array(),
            Sorter::Bubble(sort) => sort.into_array(),
            Sorter::Merge(sort) => sort.into_array(),
            Sorter::Quick(sort) => sort.into_array(),
        }
    }
}
