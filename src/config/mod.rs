//! Configuration module.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{resolve, CliOverrides, ConfigError, ConfigFile, ResolvedConfig};

/// Window size used when none is configured, for a screen of `height` rows.
///
/// Room for the screen plus a load margin of two screens on each side.
pub fn default_spread_limit(height: usize) -> usize {
    let height = height.max(1);
    2 * (height + 2 * height)
}
