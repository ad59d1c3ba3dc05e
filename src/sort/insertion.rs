use super::step::{StepEvent, StepProducer};

/// Insertion sort: one step per inserted element, after the whole shift.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    data: Vec<T>,
    next: usize,
}

impl<T: Ord> InsertionSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, next: 1 }
    }
}

impl<T: Ord> StepProducer for InsertionSort<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        let from = self.next;
        if from >= self.data.len() {
            return None;
        }

        // Adjacent swaps leave the same state as shift-then-write.
        let mut to = from;
        while to > 0 && self.data[to] < self.data[to - 1] {
            self.data.swap(to, to - 1);
            to -= 1;
        }
        self.next += 1;
        Some(StepEvent::Insert { from, to })
    }

    fn array(&self) -> &[T] {
        &self.data
    }

    fn into_array(self) -> Vec<T> {
        self.data
    }
}
