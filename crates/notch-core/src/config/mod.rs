//! Slider configuration files
//!
//! - Generic YAML loading/saving for any serde config type
//! - [`SliderConfig`]: the full configuration surface of a labeled slider,
//!   validated when turned into a [`crate::SliderView`]
//!
//! # Usage
//!
//! ```ignore
//! use notch_core::config::{load_config, SliderConfig};
//!
//! let config: SliderConfig = load_config(&path);
//! let view = config.build()?;
//! ```

mod io;
mod paths;
mod slider;

pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path};
pub use slider::{SliderColors, SliderConfig};
