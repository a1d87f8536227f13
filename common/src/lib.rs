//! # Geotrace Common
//!
//! Domain models shared by every crate in the workspace. Nothing in here
//! touches the network, spawns processes or writes files.

pub mod config;
pub mod error;
pub mod geo;
pub mod hop;
pub mod host;

#[doc(hidden)]
pub use tracing;

/// Emits a status line that the CLI formatter renders with a success glyph.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "geotrace::success", $($arg)*)
    };
}
