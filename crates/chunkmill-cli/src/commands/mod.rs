//! CLI command handlers

pub mod chunk;
pub mod languages;
pub mod transform;
