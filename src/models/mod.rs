//! Data models for the Campus Connect backend.
//!
//! Field names follow the JSON contract the web client already speaks.

mod account;
mod profile;
mod recommendation;

pub use account::*;
pub use profile::*;
pub use recommendation::*;
