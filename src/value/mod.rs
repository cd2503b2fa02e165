//! Value module - In-memory representation of decoded JSON/YAML data.
//!
//! Both the actual document and the pattern are decoded into [`Value`].

mod value;

pub use value::*;
