use super::step::{StepEvent, StepProducer};

/// Selection sort: one step per placed minimum.
#[derive(Debug, Clone)]
pub struct SelectionSort<T> {
    data: Vec<T>,
    next: usize,
}

impl<T: Ord> SelectionSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data, next: 0 }
    }
}

impl<T: Ord> StepProducer for SelectionSort<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        let i = self.next;
        if i + 1 >= self.data.len() {
            return None;
        }

        let mut min = i;
        for j in i + 1..self.data.len() {
            if self.data[j] < self.data[min] {
                min = j;
            }
        }
        self.data.swap(i, min);
        self.next += 1;
        Some(StepEvent::Swap { a: i, b: min })
    }

    fn array(&self) -> &[T] {
        &self.data
    }

    fn into_array(self) -> Vec<T> {
        self.data
    }
}
