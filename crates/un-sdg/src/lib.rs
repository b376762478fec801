#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Sustainable Development Goal badge for Yew front-ends.
//!
//! Renders one of the 17 goal icons, the composite "all" image, or the circle
//! badge, optionally as a flat color swatch. The [`core`](crate::core) module is DOM-free and
//! holds the goal registry, selector, and render model; [`UnSdg`] wraps it as a
//! Yew component, and `mount_all` (wasm32 only) upgrades `<un-sdg>` elements.

pub mod components;
pub mod core;

pub use components::{SdgStyles, UnSdg, UnSdgProps};
pub use crate::core::config::{InvalidGoalPolicy, SdgConfig};
pub use crate::core::registry::{GOALS, GoalEntry, GoalNumber};
pub use crate::core::selector::{GoalId, Resolution, resolve};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{CONFIG_ELEMENT_ID, mount_all};
