//! Integration test: sharing validated models across worker threads.
//!
//! Workers evolve their own `CompartmentState`s while reading the shared
//! model from a `ModelSlot`; the driver publishes a replacement model
//! mid-run. Each worker must see either the old or the new model, never a
//! mixture, and its own state must never be touched by anyone else.

use std::sync::{Arc, Barrier};
use std::thread;

use epinet_core::{Algorithm, CompartmentState};
use epinet_model::ModelSlot;
use epinet_test_utils::{seir_config, sir_config};

#[test]
fn workers_see_whole_models_across_publish() {
    let sir = sir_config(Algorithm::Gillespie, 0.3, 0.1)
        .build()
        .unwrap()
        .into_validated()
        .unwrap();
    let seir = seir_config(Algorithm::Gillespie)
        .build()
        .unwrap()
        .into_validated()
        .unwrap();

    let slot = Arc::new(ModelSlot::new(sir));
    let barrier = Arc::new(Barrier::new(5));

    let workers: Vec<_> = (0..4u64)
        .map(|w| {
            let slot = Arc::clone(&slot);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut seen = Vec::new();
                for step in 0..200u64 {
                    if step == 100 {
                        barrier.wait();
                    }
                    let model = slot.current();
                    // A state sized from the model it was read with always fits it.
                    let mut state = model.empty_state();
                    state.set(0, w * 1000 + step).unwrap();
                    assert_eq!(state.len(), model.compartment_count());
                    let expected_reactions = if model.compartment_count() == 3 { 2 } else { 4 };
                    assert_eq!(model.reaction_count(), expected_reactions);
                    seen.push(model.compartment_count());
                }
                seen
            })
        })
        .collect();

    barrier.wait();
    let previous = slot.publish(seir);
    assert_eq!(previous.compartment_count(), 3);

    for handle in workers {
        let seen = handle.join().unwrap();
        assert!(seen.iter().all(|&n| n == 3 || n == 4));
        // Once a worker has observed the new model it never goes back.
        let first_new = seen.iter().position(|&n| n == 4).unwrap_or(seen.len());
        assert!(seen[first_new..].iter().all(|&n| n == 4));
    }
    assert_eq!(slot.generation(), 1);
    assert_eq!(slot.current().compartment_count(), 4);
}

#[test]
fn per_cell_states_evolve_independently() {
    let model = Arc::new(
        sir_config(Algorithm::Gillespie, 0.3, 0.1)
            .build()
            .unwrap()
            .into_validated()
            .unwrap(),
    );
    let seed = CompartmentState::from_counts(vec![990, 10, 0]);

    let handles: Vec<_> = (0..4u64)
        .map(|cell| {
            let model = Arc::clone(&model);
            let mut state = seed.clone();
            thread::spawn(move || {
                // Move `cell + 1` units S -> I along reaction 0.
                let stoich = *model.stoichiometry(0).unwrap();
                for _ in 0..=cell {
                    state[stoich.source.index()] -= 1;
                    state[stoich.destination.index()] += 1;
                }
                state
            })
        })
        .collect();

    for (cell, handle) in handles.into_iter().enumerate() {
        let state = handle.join().unwrap();
        assert_eq!(state.total_population(), 1000);
        assert_eq!(state.get(1), Ok(10 + cell as u64 + 1));
    }
    assert_eq!(seed.as_slice(), &[990, 10, 0]);
}
