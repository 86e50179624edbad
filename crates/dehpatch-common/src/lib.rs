#![allow(clippy::too_many_arguments, clippy::manual_range_contains)]

pub mod feature_level;
pub mod fixed;
pub mod error;
pub mod value_type;
pub mod flags;
pub mod labels;
pub mod property;
pub mod action_pointer;
pub mod config;

pub use error::{PatchError, PatchResult};
pub use feature_level::FeatureLevel;
