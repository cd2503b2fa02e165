//! Path module - Locators for positions inside a matched value.
//!
//! Paths are plain strings: object traversal appends `/<key>`, array
//! traversal appends `[<index>]`, and the root is `/`.

mod path;

pub use path::*;
