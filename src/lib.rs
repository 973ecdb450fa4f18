//! Small standalone helpers shared by tooling code.
//!
//! Provides a flat surface of stateless, synchronous functions:
//! - `string` - comma-list splitting and camelCase conversion
//! - `fs` - file/directory existence checks and small file I/O
//! - `json` - JSON file persistence and an always-fresh value loader
//! - `merge` - key-value mapping merge with an overwrite policy
//! - `net` - external network address lookup
//! - `url` - URL and keyword predicates
//!
//! Two error policies coexist, per function: predicates and `read_json`
//! swallow failures into a benign empty/false default, while the file I/O
//! helpers propagate a typed [`Error`]. No function retries anything.

pub mod error;
pub mod fs;
pub mod json;
pub mod merge;
pub mod net;
pub mod string;
pub mod url;

pub use error::{Error, Result};
pub use fs::{is_existing_dir, is_existing_file, read_file, remove, write_file};
pub use json::{load_value, read_json, write_json};
pub use merge::{JsonMap, mix, mix_into};
pub use net::external_ipv4;
pub use string::{SplitInput, camelize, decamelize, split};
pub use url::{is_keyword, is_url};
