//! Format implementations
//!
//! Each format lives in its own directory with a parser and/or serializer
//! plus a mod.rs that wires them into the [`crate::format::Format`] trait.

pub mod markdown;
pub mod markup;
