//! Core types for postcraft.

pub mod generation;
pub mod post;
pub mod request;
pub mod usage;

pub use generation::*;
pub use post::*;
pub use request::*;
pub use usage::*;
