//! Oriel configuration.
//!
//! TOML-based configuration for the bridge: engine startup behavior,
//! script execution defaults, and per-window defaults. Every field has a
//! default so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use oriel_config::load_default;
//!
//! let config = load_default().expect("failed to load config");
//! println!("startup timeout: {}s", config.startup_timeout_secs);
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

mod template;

pub use loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use schema::{BridgeConfig, ScriptDefaults, WindowDefaults};
