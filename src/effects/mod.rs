//! Status-effect and damage resolution.

pub mod resolver;

pub use resolver::{DamageReport, EffectResolver};
