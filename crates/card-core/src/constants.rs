// Shared interaction/animation tuning constants used by the web frontend.

// Evasion
pub const HINT_ESCALATION_AT: u32 = 5; // evasion count at which the hint turns pleading

// Confetti burst
pub const BURST_COUNT: usize = 140; // particles per burst
pub const BURST_FRAMES: u32 = 180; // frames before the loop stops rescheduling
pub const FADE_FRAMES: f32 = 140.0; // alpha denominator; full opacity above this much life
pub const SPAWN_JITTER_X: f32 = 60.0; // half-width of the spawn box around the center
pub const SPAWN_JITTER_Y: f32 = 30.0;

// Tone loop
pub const TONE_TICK_MS: i32 = 220; // scheduler period
pub const TONE_MIN_MS: u32 = 60; // floor on a scheduled tone's audible length
pub const LOOP_GAIN: f32 = 0.06; // steady-state output level while playing
pub const GAIN_ATTACK_SEC: f64 = 0.02; // setTargetAtTime constants for the gain ramps
pub const GAIN_RELEASE_SEC: f64 = 0.03;

// Countdown refresh period
pub const COUNTDOWN_TICK_MS: i32 = 30_000;
