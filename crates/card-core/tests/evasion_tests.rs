// Host-side tests for the decline-button evasion logic.

use card_core::{
    decline_phrase, DodgeBounds, EvasionController, InteractionState, DECLINE_PHRASES,
    HINT_ESCALATION_AT,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn controller(seed: u64) -> EvasionController<StdRng> {
    EvasionController::new(StdRng::seed_from_u64(seed))
}

fn bounds(cw: f32, ch: f32, bw: f32, bh: f32) -> DodgeBounds {
    DodgeBounds {
        container: Vec2::new(cw, ch),
        control: Vec2::new(bw, bh),
    }
}

#[test]
fn phrase_index_matches_modulo_with_clamp_formula() {
    let n = DECLINE_PHRASES.len();
    for evasions in 0..50u32 {
        let expected = (evasions as usize % n).min(n - 1);
        assert_eq!(
            decline_phrase(evasions),
            DECLINE_PHRASES[expected],
            "wrong phrase at evasion count {evasions}"
        );
    }
}

#[test]
fn dodge_stays_inside_container_bounds() {
    let mut ctl = controller(42);
    let mut state = InteractionState::default();
    let b = bounds(320.0, 140.0, 90.0, 40.0);
    for _ in 0..500 {
        let dodge = ctl.pointer_enter(&mut state, b).expect("not accepted yet");
        assert!(dodge.position.x >= 0.0 && dodge.position.x <= 320.0 - 90.0);
        assert!(dodge.position.y >= 0.0 && dodge.position.y <= 140.0 - 40.0);
    }
}

#[test]
fn dodge_handles_control_larger_than_container() {
    let mut ctl = controller(7);
    let mut state = InteractionState::default();
    let dodge = ctl
        .pointer_enter(&mut state, bounds(50.0, 30.0, 90.0, 40.0))
        .expect("not accepted yet");
    assert_eq!(dodge.position, Vec2::ZERO);
}

#[test]
fn pointer_enter_increments_count_and_cycles_phrases() {
    let mut ctl = controller(1);
    let mut state = InteractionState::default();
    let b = bounds(300.0, 120.0, 80.0, 36.0);
    for i in 1..=8u32 {
        let dodge = ctl.pointer_enter(&mut state, b).expect("not accepted yet");
        assert_eq!(state.decline_evasions, i);
        assert_eq!(dodge.phrase, decline_phrase(i));
    }
}

#[test]
fn hint_escalates_exactly_at_fifth_event() {
    let mut ctl = controller(9);
    let mut state = InteractionState::default();
    let b = bounds(300.0, 120.0, 80.0, 36.0);
    for i in 1..=6u32 {
        let dodge = ctl.pointer_enter(&mut state, b).expect("not accepted yet");
        if i < HINT_ESCALATION_AT {
            assert!(!dodge.escalate_hint, "escalated too early at event {i}");
        } else {
            assert!(dodge.escalate_hint, "should stay escalated at event {i}");
        }
    }
}

#[test]
fn interactions_are_noops_once_accepted() {
    let mut ctl = controller(3);
    let mut state = InteractionState::default();
    let b = bounds(300.0, 120.0, 80.0, 36.0);
    for _ in 0..3 {
        let _ = ctl.pointer_enter(&mut state, b);
    }
    state.accept();

    assert!(ctl.pointer_enter(&mut state, b).is_none());
    assert!(ctl.press(&state, b).is_none());
    assert_eq!(state.decline_evasions, 3, "count must not move after accept");
}

#[test]
fn press_relocates_without_counting() {
    let mut ctl = controller(11);
    let state = InteractionState::default();
    let b = bounds(300.0, 120.0, 80.0, 36.0);
    let pos = ctl.press(&state, b).expect("not accepted yet");
    assert!(pos.x >= 0.0 && pos.x <= 220.0);
    assert!(pos.y >= 0.0 && pos.y <= 84.0);
    assert_eq!(state.decline_evasions, 0);
}

#[test]
fn accept_preserves_prior_evasion_count() {
    let mut ctl = controller(5);
    let mut state = InteractionState::default();
    let b = bounds(300.0, 120.0, 80.0, 36.0);
    for _ in 0..3 {
        let _ = ctl.pointer_enter(&mut state, b);
    }
    state.accept();
    assert!(state.accepted);
    assert_eq!(state.decline_evasions, 3);

    let snapshot = InteractionState::decode(&state.encode());
    assert_eq!(snapshot, state);
}
