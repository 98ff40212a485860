use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use range_core::format_elapsed;
use range_core::model::{Color, ENV_REVEAL_MS, ENV_SAMPLE_SIZE, HandColorEntry};
use range_core::time::fixed_clock;
use services::{DrillLoopService, DrillView, RevealOutcome, SessionError, SessionPhase};
use storage::{InMemoryCatalog, default_entries};

fn three_hand_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_entries(vec![
        HandColorEntry::new("AA", Color::Navy),
        HandColorEntry::new("KQo", Color::Yellow),
        HandColorEntry::new("T9s", Color::Green),
    ])
}

#[tokio::test]
async fn full_drill_reaches_result_screen() {
    let mut clock = fixed_clock();
    let mut service = DrillLoopService::new(clock, Arc::new(three_hand_catalog()));
    let mut rng = StdRng::seed_from_u64(17);

    let mut state = service.start_with_rng(&mut rng).await.unwrap();
    assert_eq!(state.session().questions().len(), 3);

    for round in 0..3 {
        clock.advance_ms(1_500);
        service = service.with_clock(clock);

        let question = state.session().current_question().unwrap().clone();
        // miss the first hand on purpose
        let pick = if round == 0 {
            Color::Gray
        } else {
            question.correct_color
        };
        let (next, ticket) = service.submit_answer(state, pick);
        let ticket = ticket.unwrap();
        assert!(service.view(&next).is_locked());

        clock.advance_ms(1_000);
        service = service.with_clock(clock);
        let (next, outcome) = service.complete_reveal(next, &ticket);
        if round < 2 {
            assert_eq!(outcome, RevealOutcome::Advanced(round + 1));
        } else {
            assert_eq!(outcome, RevealOutcome::Finished);
        }
        state = next;
    }

    assert_eq!(state.phase(), SessionPhase::Result);
    let DrillView::Result(report) = service.view(&state) else {
        panic!("expected result view");
    };
    assert_eq!(report.summary.total(), 3);
    assert_eq!(report.summary.correct_count(), 2);
    assert!((report.summary.accuracy_percent() - 66.7).abs() < f64::EPSILON);
    assert_eq!(report.summary.missed().len(), 1);
    assert_eq!(report.elapsed_ms, 4_500);
    assert_eq!(format_elapsed(report.elapsed_ms), "00:04.50");
}

#[tokio::test]
async fn restart_invalidates_outstanding_ticket() {
    let mut clock = fixed_clock();
    let mut service = DrillLoopService::new(clock, Arc::new(three_hand_catalog()));

    let state = service.start().await.unwrap();
    let (state, ticket) = service.submit_answer(state, Color::Red);
    let ticket = ticket.unwrap();
    let old_id = state.session().id();

    let fresh = service.restart(state).await.unwrap();
    assert_ne!(fresh.session().id(), old_id);
    assert_eq!(fresh.phase(), SessionPhase::Quiz);
    assert_eq!(fresh.session().current_index(), 0);
    assert!(fresh.session().answers().is_empty());

    clock.advance_ms(5_000);
    service = service.with_clock(clock);
    let (after, outcome) = service.complete_reveal(fresh.clone(), &ticket);
    assert_eq!(outcome, RevealOutcome::Ignored);
    assert_eq!(after, fresh);
}

#[tokio::test]
async fn empty_source_falls_back_to_bundled_catalog() {
    let service = DrillLoopService::new(fixed_clock(), Arc::new(InMemoryCatalog::new()));

    let state = service.start().await.unwrap();
    let bundled: Vec<String> = default_entries().into_iter().map(|e| e.hand).collect();
    assert_eq!(state.session().questions().len(), bundled.len());
    for question in state.session().questions() {
        assert!(bundled.contains(&question.hand));
    }
}

fn suited_aces() -> InMemoryCatalog {
    InMemoryCatalog::with_entries(
        ["AKs", "AQs", "AJs", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s", "A4s", "A3s", "A2s"]
            .iter()
            .map(|h| HandColorEntry::new(*h, Color::Red))
            .collect(),
    )
}

#[tokio::test]
async fn restart_draws_a_fresh_question_list() {
    let service = DrillLoopService::from_lookup(fixed_clock(), Arc::new(suited_aces()), |key| {
        (key == ENV_SAMPLE_SIZE).then(|| "4".to_string())
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    let state = service.start_with_rng(&mut rng).await.unwrap();
    let (state, _) = service.submit_answer(state, Color::Red);
    let before: Vec<String> = state.session().questions().iter().map(|q| q.hand.clone()).collect();
    assert_eq!(before.len(), 4);

    let fresh = service.restart_with_rng(state, &mut rng).await.unwrap();
    let after: Vec<String> = fresh.session().questions().iter().map(|q| q.hand.clone()).collect();
    assert_eq!(after.len(), 4);
    assert_ne!(before, after);
    assert!(fresh.session().answers().is_empty());
    assert_eq!(fresh.session().current_index(), 0);
}

#[tokio::test]
async fn configured_reveal_delay_sets_ticket_due_time() {
    let clock = fixed_clock();
    let service = DrillLoopService::from_lookup(clock, Arc::new(three_hand_catalog()), |key| {
        (key == ENV_REVEAL_MS).then(|| "250".to_string())
    })
    .unwrap();
    assert_eq!(service.settings().reveal_delay_ms(), 250);
    assert_eq!(service.settings().sample_size(), 100);

    let state = service.start().await.unwrap();
    let (_, ticket) = service.submit_answer(state, Color::Navy);
    assert_eq!(ticket.unwrap().due_at_ms, clock.now_ms() + 250);
}

#[test]
fn invalid_configuration_is_a_settings_error() {
    let result = DrillLoopService::from_lookup(fixed_clock(), Arc::new(three_hand_catalog()), |key| {
        (key == ENV_SAMPLE_SIZE).then(|| "0".to_string())
    });
    assert!(matches!(result, Err(SessionError::Settings(_))));
}
