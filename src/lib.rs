//! Library entry for vidya-lingo: the portal's translation layer.
//!
//! - [`i18n`]: display language selection, persistence, and locale application
//! - [`translate`]: per-language cache, pending tracker, and debounced batch dispatcher
//! - [`sources`]: generative-model translation backend
//! - [`config`]: `settings.conf` paths, parsing, and persistence

pub mod config;
pub mod i18n;
pub mod sources;
pub mod translate;
pub mod util;

#[cfg(test)]
mod test_utils;
