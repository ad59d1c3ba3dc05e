use super::step::{StepEvent, StepProducer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
    Done { start: usize, end: usize },
}

/// Top-down merge sort over inclusive ranges, replayed from a work stack.
///
/// Each merge emits the written-back range, then each completed sort call
/// emits once more. Ties go to the right run, so equal elements can swap
/// order: the merge is not stable.
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    data: Vec<T>,
    tasks: Vec<Task>,
}

impl<T: Ord + Clone> MergeSort<T> {
    pub fn new(data: Vec<T>) -> Self {
        let tasks = match data.len() {
            0 => Vec::new(),
            len => vec![Task::Sort {
                start: 0,
                end: len - 1,
            }],
        };
        Self { data, tasks }
    }

    /// Merge `start..=mid` with `mid+1..=end`, returning how many elements were written.
    fn merge(&mut self, start: usize, mid: usize, end: usize) -> usize {
        let mut merged = Vec::with_capacity(end - start + 1);
        let (mut left, mut right) = (start, mid + 1);

        while left <= mid && right <= end {
            if self.data[left] < self.data[right] {
                merged.push(self.data[left].clone());
                left += 1;
            } else {
                merged.push(self.data[right].clone());
                right += 1;
            }
        }
        merged.extend_from_slice(&self.data[left..=mid]);
        merged.extend_from_slice(&self.data[right..=end]);

        let written = merged.len();
        self.data[start..=end].clone_from_slice(&merged);
        written
    }
}

impl<T: Ord + Clone> StepProducer for MergeSort<T> {
    type Item = T;

    fn next_step(&mut self) -> Option<StepEvent> {
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Sort { start, end } => {
                    if end <= start {
                        continue;
                    }
                    let mid = start + (end - start) / 2;
                    self.tasks.push(Task::Done { start, end });
                    self.tasks.push(Task::Merge { start, mid, end });
                    self.tasks.push(Task::Sort { start: mid + 1, end });
                    self.tasks.push(Task::Sort { start, end: mid });
                }
                Task::Merge { start, mid, end } => {
                    if self.merge(start, mid, end) > 0 {
                        return Some(StepEvent::Merge { start, end });
                    }
                }
                Task::Done { start, end } => return Some(StepEvent::MergeDone { start, end }),
            }
        }
        None
    }

    fn array(&self) -> &[T] {
        &self.data
    }

    fn into_array(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_elements_merge_then_finish() {
        let mut sort = MergeSort::new(vec![2, 1]);
        assert_eq!(sort.next_step(), Some(StepEvent::Merge { start: 0, end: 1 }));
        assert_eq!(sort.array(), &[1, 2]);
        assert_eq!(
            sort.next_step(),
            Some(StepEvent::MergeDone { start: 0, end: 1 })
        );
        assert_eq!(sort.next_step(), None);
    }

    #[test]
    fn visits_left_half_before_right() {
        let mut sort = MergeSort::new(vec![3, 1, 2]);
        let events: Vec<_> = std::iter::from_fn(|| sort.next_step()).collect();
        assert_eq!(
            events,
            vec![
                StepEvent::Merge { start: 0, end: 1 },
                StepEvent::MergeDone { start: 0, end: 1 },
                StepEvent::Merge { start: 0, end: 2 },
                StepEvent::MergeDone { start: 0, end: 2 },
            ]
        );
        assert_eq!(sort.into_array(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_take_the_right_run() {
        // Keys compare equal, tags tell the runs apart.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Tagged(u8, char);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut sort = MergeSort::new(vec![Tagged(1, 'l'), Tagged(1, 'r')]);
        while sort.next_step().is_some() {}
        let tags: Vec<char> = sort.array().iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['r', 'l']);
    }

    #[test]
    fn empty_and_single_emit_nothing() {
        assert_eq!(MergeSort::<u8>::new(Vec::new()).next_step(), None);
        assert_eq!(MergeSort::new(vec![1]).next_step(), None);
    }
}
