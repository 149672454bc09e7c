//! remap-core: declarative remapping of nested JSON structures
//!
//! Given a source `serde_json::Value` and a mapping of from-path → to-path
//! strings, produces a new structure by reading each from-path out of the
//! source and writing the value at the to-path of the result:
//! - Delimited path parsing with `base[index]` / `base[key:value]` array access
//! - Missing segments resolve to absent (never an error); type misuse is one
//! - Per-mapping default substitution and per-value transform callbacks
//! - Recursive remapping of nested arrays and sub-structures
//!
pub mod access;
pub mod error;
pub mod mapper;
pub mod mapping;
pub mod path;

pub use access::{read_path, write_path};
pub use error::{Error, Result};
pub use mapper::{Remap, Remapper, map, map_with, map_with_options};
pub use mapping::{Mapping, Options};
pub use path::{IndexSpec, Segment, parse_path, split_keys};
