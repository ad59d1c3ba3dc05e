mod common;

use common::{collect_states, is_sorted};
use sortviz::dataset;
use sortviz::sort::{Algorithm, Phase, StepEvent, StepProducer};

const SEEDS: [u64; 4] = [0, 1, 42, 0xdead_beef];

#[test]
fn every_algorithm_sorts_shuffled_input() {
    for algorithm in Algorithm::ALL {
        for len in [0, 1, 2, 3, 17, 64] {
            for seed in SEEDS {
                let data = dataset::shuffled(len, seed);
                let mut steps = algorithm.steps(data);
                steps.by_ref().for_each(drop);
                let result = steps.into_producer().into_array();
                assert!(
                    is_sorted(&result),
                    "{} left {:?} unsorted (len {}, seed {})",
                    algorithm,
                    result,
                    len,
                    seed
                );
                assert_eq!(result.len(), len as usize);
            }
        }
    }
}

#[test]
fn every_step_is_a_permutation_of_the_input() {
    for algorithm in Algorithm::ALL {
        let data = dataset::shuffled(40, 7);
        let mut expected = data.clone();
        expected.sort();

        for (index, state) in collect_states(algorithm, data).into_iter().enumerate() {
            let mut sorted = state.clone();
            sorted.sort();
            assert_eq!(
                sorted, expected,
                "{} step {} lost or duplicated an element",
                algorithm, index
            );
        }
    }
}

#[test]
fn duplicates_are_sorted_and_preserved() {
    let data = vec![3, 1, 3, 2, 1, 2, 3, 1];
    let mut expected = data.clone();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let states = collect_states(algorithm, data.clone());
        let last = states.last().cloned().unwrap_or_else(|| data.clone());
        assert_eq!(last, expected, "{}", algorithm);
    }
}

#[test]
fn fixed_step_counts() {
    for len in [0u32, 1, 2, 5, 30] {
        let n = len as usize;
        let data = dataset::shuffled(len, 3);

        let selection = Algorithm::Selection.steps(data.clone()).count();
        let insertion = Algorithm::Insertion.steps(data.clone()).count();
        let bubble = Algorithm::Bubble.steps(data).count();

        assert_eq!(selection, n.saturating_sub(1));
        assert_eq!(insertion, n.saturating_sub(1));
        assert_eq!(bubble, n * n.saturating_sub(1) / 2);
    }
}

#[test]
fn step_count_matches_emitted_steps() {
    let data = dataset::shuffled(25, 11);
    for algorithm in Algorithm::ALL {
        let emitted = algorithm.steps(data.clone()).count();
        if let Some(expected) = algorithm.step_count(data.len()) {
            assert_eq!(emitted, expected, "{}", algorithm);
        }
    }
}

#[test]
fn sorted_input_is_left_sorted() {
    let data: Vec<u32> = (1..=6).collect();

    for algorithm in Algorithm::ALL {
        let states = collect_states(algorithm, data.clone());
        assert_eq!(states.last(), Some(&data), "{}", algorithm);
        if let Some(expected) = algorithm.step_count(data.len()) {
            assert_eq!(states.len(), expected, "{}", algorithm);
        }
    }
}

#[test]
fn sorted_input_never_moves_outside_quick_sort() {
    let data: Vec<u32> = (1..=6).collect();

    // Quick sort parks the midpoint pivot at the end of each range first.
    for algorithm in [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
    ] {
        let states = collect_states(algorithm, data.clone());
        assert!(
            states.iter().all(|state| *state == data),
            "{} moved an element of sorted input",
            algorithm
        );
    }
}

#[test]
fn merge_sort_trace_on_reversed_five() {
    let states = collect_states(Algorithm::Merge, vec![5, 4, 3, 2, 1]);
    assert_eq!(
        states,
        vec![
            vec![4, 5, 3, 2, 1],
            vec![4, 5, 3, 2, 1],
            vec![3, 4, 5, 2, 1],
            vec![3, 4, 5, 2, 1],
            vec![3, 4, 5, 1, 2],
            vec![3, 4, 5, 1, 2],
            vec![1, 2, 3, 4, 5],
            vec![1, 2, 3, 4, 5],
        ]
    );
}

#[test]
fn quick_sort_trace_on_reversed_five() {
    let states = collect_states(Algorithm::Quick, vec![5, 4, 3, 2, 1]);
    assert_eq!(
        states,
        vec![
            vec![1, 4, 5, 2, 3],
            vec![1, 2, 5, 4, 3],
            vec![1, 2, 3, 4, 5],
            vec![1, 2, 3, 4, 5],
            vec![1, 2, 3, 4, 5],
        ]
    );
}

#[test]
fn quick_sort_places_low_pivot_at_boundary() {
    let steps: Vec<_> = Algorithm::Quick.steps(vec![3, 1, 2]).collect();

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].event, StepEvent::PivotPlaced { index: 0 });
    assert_eq!(steps[0].state[0], 1);
    assert_eq!(steps[1].event, StepEvent::PivotPlaced { index: 1 });
    assert_eq!(steps[1].state, vec![1, 2, 3]);
}

#[test]
fn quick_sort_places_one_pivot_per_partition() {
    let data = dataset::shuffled(50, 5);
    let pivots = Algorithm::Quick
        .steps(data)
        .filter(|step| matches!(step.event, StepEvent::PivotPlaced { .. }))
        .count();
    // Distinct values: one pivot per partition, at least one per two elements.
    assert!(pivots <= 50);
    assert!(pivots >= 25);
}

#[test]
fn steps_are_fused_and_track_phase() {
    for algorithm in Algorithm::ALL {
        let mut steps = algorithm.steps(vec![2, 1]);
        assert_eq!(steps.phase(), Phase::NotStarted);

        assert!(steps.next().is_some());
        assert_eq!(steps.phase(), Phase::Suspended);

        steps.by_ref().for_each(drop);
        assert_eq!(steps.phase(), Phase::Exhausted);
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }
}

#[test]
fn empty_input_is_exhausted_on_first_pull() {
    for algorithm in Algorithm::ALL {
        let mut steps = algorithm.steps(Vec::<u32>::new());
        assert!(steps.next().is_none());
        assert_eq!(steps.phase(), Phase::Exhausted);
        assert_eq!(steps.emitted(), 0);
    }
}

#[test]
fn producer_borrow_matches_emitted_copy() {
    let data = dataset::shuffled(12, 9);
    let mut sorter = Algorithm::Insertion.sorter(data.clone());

    for step in Algorithm::Insertion.steps(data) {
        let event = sorter.next_step();
        assert_eq!(event, Some(step.event));
        assert_eq!(sorter.array(), step.state.as_slice());
    }
    assert_eq!(sorter.next_step(), None);
    assert_eq!(sorter.algorithm(), Algorithm::Insertion);
}

#[test]
fn generic_over_ordered_values() {
    let words = vec!["pear", "apple", "fig", "banana"];
    for algorithm in Algorithm::ALL {
        let mut sorter = algorithm.sorter(words.clone());
        while sorter.next_step().is_some() {}
        assert_eq!(sorter.into_array(), vec!["apple", "banana", "fig", "pear"]);
    }
}
