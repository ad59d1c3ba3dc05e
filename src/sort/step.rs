//! Step types shared by every sort generator.

use serde::Serialize;
use std::iter::FusedIterator;

/// Mutation that produced an emitted step.
///
/// Indices always refer to positions in the array being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// Elements at `a` and `b` were swapped (`a == b` is a no-op swap).
    Swap { a: usize, b: usize },
    /// Value held at `from` was shifted left and written at `to`.
    Insert { from: usize, to: usize },
    /// Elements at `i` and `j` were compared and possibly swapped.
    Compare { i: usize, j: usize, swapped: bool },
    /// Merge buffer was written back over `start..=end`.
    Merge { start: usize, end: usize },
    /// The merge call over `start..=end` returned.
    MergeDone { start: usize, end: usize },
    /// Partition pivot landed at its final `index`.
    PivotPlaced { index: usize },
}

/// One emitted array state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step<T> {
    pub event: StepEvent,
    pub state: Vec<T>,
}

/// Lifecycle of a step sequence.
///
/// There is no running phase: a pull runs to its next step before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Suspended,
    Exhausted,
}

/// A suspendable sort that advances one visualizable unit per call.
///
/// Implementations own the array exclusively. Between calls the live array
/// can be inspected through [`StepProducer::array`]; the shared borrow keeps
/// callers from mutating it while the sort is suspended.
pub trait StepProducer {
    /// Element type of the array being sorted.
    type Item;

    /// Advance to the next step, or `None` once the sort has finished.
    ///
    /// Must keep returning `None` after the first `None`.
    fn next_step(&mut self) -> Option<StepEvent>;

    /// Current state of the array.
    fn array(&self) -> &[Self::Item];

    /// Give the array back, in whatever state the sort left it.
    fn into_array(self) -> Vec<Self::Item>;
}

/// Copy-on-emit iterator over a [`StepProducer`].
#[derive(Debug)]
pub struct Steps<P> {
    producer: P,
    phase: Phase,
    emitted: usize,
}

impl<P> Steps<P> {
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            phase: Phase::NotStarted,
            emitted: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of steps handed out so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    pub fn into_producer(self) -> P {
        self.producer
    }
}

impl<P> Iterator for Steps<P>
where
    P: StepProducer,
    P::Item: Clone,
{
    type Item = Step<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Exhausted {
            return None;
        }
        match self.producer.next_step() {
            Some(event) => {
                self.phase = Phase::Suspended;
                self.emitted += 1;
                Some(Step {
                    event,
                    state: self.producer.array().to_vec(),
                })
            }
            None => {
                self.phase = Phase::Exhausted;
                None
            }
        }
    }
}

impl<P> FusedIterator for Steps<P>
where
    P: StepProducer,
    P::Item: Clone,
{
}
