//! Core primitives shared by every system.

pub mod random;
pub mod vec2;

pub use vec2::Vec2;
