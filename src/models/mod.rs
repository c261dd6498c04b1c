//! Model definitions.

pub mod google;

pub use google::GoogleModel;
