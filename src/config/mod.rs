//! Configuration module.
//!
//! Settings resolve through a fixed chain: defaults, then the TOML config
//! file, then environment variables, then CLI flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
