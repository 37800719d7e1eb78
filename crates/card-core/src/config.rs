//! Static configuration surface for the card.
//!
//! Everything here is display text or a feature flag; the interactive pieces
//! only ever look at `music.enabled`. Edit `CardConfig::default()` to
//! personalize names, messages, photo, and the target date.

#[derive(Clone, Copy, Debug)]
pub struct MusicConfig {
    /// When false the mute/unmute control is hidden and no player is built.
    pub enabled: bool,
}

#[derive(Clone, Debug)]
pub struct CardConfig {
    pub recipient_name: &'static str,
    pub from_name: &'static str,
    pub title_prefix: &'static str,
    pub subtitle: &'static str,
    pub message: &'static str,
    pub accepted_message: &'static str,
    /// Local-time timestamp string, parsed by the host's date parser.
    pub target_date_local: &'static str,
    /// Relative or absolute image URL; `None` shows the fallback panel.
    pub photo_url: Option<&'static str>,
    pub music: MusicConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient_name: "Bujji",
            from_name: "Your girl <3",
            title_prefix: "Hey",
            subtitle: "I made this tiny website just for you.",
            message: "You’re my favorite person. Will you be my Valentine?",
            accepted_message:
                "Okay now you’re officially my Valentine. Screenshot this and send it to me 😚",
            target_date_local: "2026-02-14T00:00:00",
            photo_url: Some("./img/panda.webp"),
            music: MusicConfig { enabled: true },
        }
    }
}

// Strings the interaction handlers swap in.
pub const ACCEPT_LABEL_FINAL: &str = "Yesss 💞";
pub const HINT_ACCEPTED: &str = "Best answer ever 😌";
pub const HINT_ESCALATED: &str = "Babe… just press YES already 😭💘";
