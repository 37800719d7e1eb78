// Host-side tests for the persisted interaction state.

use card_core::InteractionState;

#[test]
fn fresh_state_has_documented_defaults() {
    let state = InteractionState::default();
    assert!(!state.accepted);
    assert_eq!(state.decline_evasions, 0);
    assert!(!state.audio_enabled);
}

#[test]
fn malformed_snapshots_fall_back_to_defaults() {
    for raw in ["", "not json", "[1,2,3]", "{\"accepted\":\"maybe\"}"] {
        assert_eq!(
            InteractionState::decode(raw),
            InteractionState::default(),
            "expected defaults for {raw:?}"
        );
    }
}

#[test]
fn snapshot_uses_the_stored_field_names() {
    let mut state = InteractionState::default();
    state.record_evasion();
    state.record_evasion();
    state.set_audio(true);

    let raw = state.encode();
    assert!(raw.contains("\"accepted\":false"), "raw: {raw}");
    assert!(raw.contains("\"noClicks\":2"), "raw: {raw}");
    assert!(raw.contains("\"musicOn\":true"), "raw: {raw}");
}

#[test]
fn decodes_a_snapshot_written_by_the_original_page() {
    let state = InteractionState::decode(r#"{"accepted":true,"noClicks":7,"musicOn":false}"#);
    assert!(state.accepted);
    assert_eq!(state.decline_evasions, 7);
    assert!(!state.audio_enabled);
}

#[test]
fn evasion_count_is_monotonic() {
    let mut state = InteractionState::default();
    let mut prev = 0;
    for _ in 0..10 {
        let next = state.record_evasion();
        assert!(next > prev);
        prev = next;
    }
}

#[test]
fn accept_is_terminal_until_reset() {
    let mut state = InteractionState::default();
    state.accept();
    assert!(state.accepted);
    state.accept();
    assert!(state.accepted);

    state = InteractionState::default();
    assert!(!state.accepted);
}
