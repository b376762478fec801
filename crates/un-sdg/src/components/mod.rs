//! Yew components exported by the crate.

pub mod un_sdg;

pub use un_sdg::{SdgStyles, UnSdg, UnSdgProps};
