use super::step::{StepEvent, StepProducer};

/// Partition scan in progress. The pivot sits at `end` until placed.
#[derive(Debug, Clone, Copy)]
struct Partition {
    start: usize,
    end: usize,
    boundary: usize,
    cursor: usize,
}

/// Quick sort with a midpoint pivot and Lomuto partitioning.
///
/// Emits a step for every swap into the low side of a partition and one
/// more when the pivot lands. Pending sub-ranges live on an explicit stack,
/// left range first.
#[derive(Debug, Clone)]
pub struct QuickSort<T> {
    data: Vec<T>,
    pending: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl<T: Ord> QuickSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let pending = match data.len() {
            0 => Vec::new(),
            len => vec![(0, len - 1)],
        };
        Self {
            data,
            pending,
            partition: None,
        }
    }

    fn start_partition(&mut self, start: usize, end: usize) {
        let mid = start + (end - start) / 2;
        self.data.swap(mid, end);
        self.partition = Some(Partition {
            start,
            end,
            boundary: start,
            cursor: start,
        });
    }
}

impl<T: Ord> StepProducer for QuickSort<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        loop {
            if let Some(part) = self.partition.as_mut() {
                while part.cursor < part.end {
                    let i = part.cursor;
                    part.cursor += 1;
                    if self.data[i] < self.data[part.end] {
                        let low = part.boundary;
                        self.data.swap(i, low);
                        part.boundary += 1;
                        return Some(StepEvent::Swap { a: i, b: low });
                    }
                }

                let Partition {
                    start,
                    end,
                    boundary,
                    ..
                } = *part;
                self.partition = None;
                self.data.swap(end, boundary);
                self.pending.push((boundary + 1, end));
                if boundary > start {
                    self.pending.push((start, boundary - 1));
                }
                return Some(StepEvent::PivotPlaced { index: boundary });
            }

            let (start, end) = self.pending.pop()?;
            if start < end {
                self.start_partition(start, end);
            }
        }
    }

    fn array(&self) -> &[T] {
        &self.data
    }

    fn into_array(self) -> Vec<T> {
        self.data
    }
}
