//! The pattern rules engine.
//!
//! Leaf classifiers and selectors live in their own modules; `basic`, `pro`
//! and `elite` compose them into the tiered responses.

pub mod basic;
pub mod colors;
pub mod elite;
pub mod environment;
pub mod gear;
pub mod list;
pub mod lures;
pub mod phase;
pub mod pro;
pub mod targets;
pub mod techniques;
pub mod zone;

pub use basic::build_basic_pattern;
pub use elite::{
    build_elite_pattern, build_vision_tier_pattern, generate_elite_pattern,
    generate_vision_tier_pattern, normalize_time_of_day,
};
pub use pro::{build_pro_pattern, generate_pro_pattern, weather_for_request};
