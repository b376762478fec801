//! Core, DOM-free primitives for the goal badge.
pub mod assets;
pub mod attributes;
pub mod config;
pub mod registry;
pub mod render;
pub mod selector;
pub mod state;
pub mod theme;
