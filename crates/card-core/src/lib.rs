pub mod config;
pub mod constants;
pub mod countdown;
pub mod evasion;
pub mod particles;
pub mod state;
pub mod tone;

pub use config::*;
pub use constants::*;
pub use countdown::*;
pub use evasion::*;
pub use particles::*;
pub use state::*;
pub use tone::*;
