//! Persistence of configuration sections.

pub mod section;

pub use section::{load_section, parse_section, render_section, save_section, ConfigError};
