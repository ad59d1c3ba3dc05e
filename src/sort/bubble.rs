use super::step::{StepEvent, StepProducer};

/// Exchange-style bubble sort over every pair `(i, j)` with `i < j`.
///
/// A step is emitted after each comparison, swapped or not, so a run of
/// length `n` always yields `n * (n - 1) / 2` steps.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    data: Vec<T>,
    i: usize,
    j: usize,
}

impl<T: Ord> BubbleSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, i: 0, j: 1 }
    }
}

impl<T: Ord> StepProducer for BubbleSort<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        let len = self.data.len();
        if self.i + 1 >= len {
            return None;
        }
        if self.j >= len {
            self.i += 1;
            self.j = self.i + 1;
        }
        if self.j >= len {
            return None;
        }

        let (i, j) = (self.i, self.j);
        let swapped = self.data[j] < self.data[i];
        if swapped {
            self.data.swap(i, j);
        }
        self.j += 1;
        Some(StepEvent::Compare { i, j, swapped })
    }

    fn array(&self) -> &[T] {
        &self.data
    }

    fn into_array(self) -> Vec<T> {
        self.data
    }
}
