//! # amanda-options
//!
//! Typed model of the `holdingdisk` section of an Amanda backup
//! configuration.
//!
//! - **`domain`** – [`HoldingDiskConfig`], a value object that starts out
//!   with sane defaults and refuses chunk sizes outside
//!   `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]` (`0` selects the maximum).
//! - **`storage`** – TOML persistence of one section, validated on load.
//!
//! Rendering the surrounding `amanda.conf` file is left to the caller, which
//! reads the final values through the accessors.

pub mod domain;
pub mod storage;

// Re-export the most-used items at the crate root so callers can write
// `amanda_options::HoldingDiskConfig`.
pub use domain::holdingdisk::{
    HoldingDiskConfig, HoldingDiskError, DEFAULT_CHUNK_SIZE, DEFAULT_DIRECTORY, DEFAULT_USE,
    MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
};
pub use storage::ConfigError;
