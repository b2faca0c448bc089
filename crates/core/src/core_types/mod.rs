//! Core types and utilities

pub mod permutation;
pub mod vec2;

pub use vec2::Vec2;
