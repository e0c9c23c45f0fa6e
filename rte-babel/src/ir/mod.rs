//! Intermediate Representation of editor documents.

pub mod nodes;
