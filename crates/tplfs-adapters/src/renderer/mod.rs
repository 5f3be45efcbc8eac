//! Template engine bridges.

mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
