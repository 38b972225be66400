//! User configuration: paths, `settings.conf` parsing, and persistence.

pub mod paths;
pub mod settings;
pub mod settings_save;
pub mod skeletons;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{Settings, load_settings_from, settings};
pub use settings_save::save_key_at;
