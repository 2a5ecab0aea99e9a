//! Index persistence.
//!
//! The index is a single compact JSON file. Writes go through a
//! temporary sibling and a rename, after the payload passes the
//! schema check in [`validator`].
//!
//! # Output Layout
//!
//! ```text
//! {output_dir}/
//! ├── chatbot.index.json        # Complete index
//! └── .chatbot.index.json.tmp   # Only present mid-write
//! ```

pub mod validator;
pub mod writer;

pub use validator::{check_payload, validate_payload, ValidationReport};
pub use writer::{read_index, write_index};
