//! Configuration management.
//!
//! Settings live in `~/.config/keycalc/config.toml`. A missing file means
//! defaults; a broken one is logged and ignored.

mod service;
mod types;
mod validation;

pub use service::{
    config, config_dir, config_file_exists, config_path, init_config, init_config_from,
    load_config_from, save_config_to, update_config,
};
pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config};
