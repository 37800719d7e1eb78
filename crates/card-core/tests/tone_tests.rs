// Host-side tests for the tone-loop sequencing.

use card_core::{effective_ms, PlayerState, ToneSequencer, ToneStep, MELODY, TONE_MIN_MS};

#[test]
fn melody_steps_are_sane() {
    assert!(!MELODY.is_empty());
    for step in MELODY {
        assert!(step.frequency_hz > 20.0 && step.frequency_hz < 20_000.0);
        assert!(step.duration_ms > 0);
    }
}

#[test]
fn sequencer_walks_the_melody_in_order() {
    let mut seq = ToneSequencer::new();
    for expected in MELODY {
        assert_eq!(seq.advance(), *expected);
    }
}

#[test]
fn sequencer_wraps_circularly() {
    let mut seq = ToneSequencer::new();
    let first_pass: Vec<_> = (0..MELODY.len()).map(|_| seq.advance()).collect();
    let second_pass: Vec<_> = (0..MELODY.len()).map(|_| seq.advance()).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn restart_replays_the_melody_from_the_top() {
    let mut seq = ToneSequencer::new();
    let _ = seq.advance();
    let _ = seq.advance();
    seq.reset();
    assert_eq!(seq.advance(), MELODY[0], "restart must not resume mid-phrase");
}

#[test]
fn double_start_keeps_the_first_scheduler() {
    let mut st = PlayerState::default();
    assert!(!st.is_playing());
    assert!(st.begin(7));
    assert!(st.is_playing());
    assert!(!st.begin(8), "second start must be a no-op");
    assert_eq!(st.end(), Some(7), "first scheduler handle must survive");
}

#[test]
fn double_stop_is_a_noop() {
    let mut st = PlayerState::default();
    assert!(st.end().is_none(), "stop while stopped has nothing to cancel");
    assert!(st.begin(3));
    assert_eq!(st.end(), Some(3));
    assert!(st.end().is_none());
    assert!(!st.is_playing());
}

#[test]
fn effective_duration_is_floored() {
    let short = ToneStep {
        frequency_hz: 440.0,
        duration_ms: 10,
    };
    assert_eq!(effective_ms(short), TONE_MIN_MS);

    let long = ToneStep {
        frequency_hz: 440.0,
        duration_ms: 240,
    };
    assert_eq!(effective_ms(long), 240);
}
