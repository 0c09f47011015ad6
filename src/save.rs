//! Persistence: the save-slot codecs and file provider.
//!
//! The game state travels as a 62-field positional text buffer
//! ([`codec`]), settings as one `~`-separated line ([`settings`]), and
//! [`files`] owns the on-disk slot layout and the load-fallback policy.

pub mod codec;
pub mod files;
pub mod settings;

pub use settings::Settings;
